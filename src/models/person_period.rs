//! Person-period rows
//!
//! A [`PersonPeriodRecord`] is one (person, period) pair that was both
//! eligible and observed in that period, carrying the demographic snapshot
//! and the period's source flags. A person contributes at most one row per
//! period, independently across periods.

use crate::models::observation::SourceFlags;
use crate::models::stratum::StratumKey;
use crate::models::types::{RaceCategory, Sex};

/// One eligible-and-observed (person, period) pair
#[derive(Debug, Clone)]
pub struct PersonPeriodRecord {
    /// Personal identifier
    pub person_id: String,
    /// Calendar year of the period
    pub year: i32,
    /// Sex of the person
    pub sex: Sex,
    /// Race category of the person
    pub race: RaceCategory,
    /// Age in the period, by calendar-year difference
    pub age: i32,
    /// Index of the age band in the configured partition
    pub age_band: usize,
    /// Per-source observation flags for this period
    pub flags: SourceFlags,
}

impl PersonPeriodRecord {
    /// Stratum key this row belongs to
    #[must_use]
    pub fn stratum_key(&self) -> StratumKey {
        StratumKey {
            sex: self.sex,
            race: self.race,
            age_band: self.age_band,
            year: self.year,
        }
    }
}
