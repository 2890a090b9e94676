//! Person-level observation records
//!
//! An [`ObservationRecord`] is the ingested unit of input: one person with
//! demographic attributes and, for every configured period, one boolean flag
//! per observation source. Records are immutable once built; person ids are
//! assumed already linked and unique.

use chrono::NaiveDate;
use smallvec::SmallVec;

use crate::config::StudyConfig;
use crate::error::{Result, StrataError};
use crate::models::types::{RaceCategory, Sex};

/// Per-source observation flags for one period
pub type SourceFlags = SmallVec<[bool; 8]>;

/// A person's multi-period, multi-source observation history
#[derive(Debug, Clone)]
pub struct ObservationRecord {
    /// Personal identifier, unique and externally linked
    pub person_id: String,
    /// Sex of the person
    pub sex: Sex,
    /// Race category of the person
    pub race: RaceCategory,
    /// Birth date, used for eligibility and age derivation
    pub birth_date: NaiveDate,
    /// One flag vector per configured period, indexed by source position
    pub captures: Vec<SourceFlags>,
}

impl ObservationRecord {
    /// Create a record from its parts
    #[must_use]
    pub fn new(
        person_id: impl Into<String>,
        sex: Sex,
        race: RaceCategory,
        birth_date: NaiveDate,
        captures: Vec<SourceFlags>,
    ) -> Self {
        Self {
            person_id: person_id.into(),
            sex,
            race,
            birth_date,
            captures,
        }
    }

    /// Whether any source observed this person in the given period
    #[must_use]
    pub fn observed_in(&self, period_idx: usize) -> bool {
        self.captures
            .get(period_idx)
            .is_some_and(|flags| flags.iter().any(|&f| f))
    }

    /// Check the record's flag arity against the configuration
    ///
    /// The flag matrix must carry exactly one vector per configured period
    /// and one flag per configured source. A mismatch is structural and
    /// aborts the run.
    pub fn validate_shape(&self, config: &StudyConfig) -> Result<()> {
        if self.captures.len() != config.period_count() {
            return Err(StrataError::Schema(format!(
                "record {} has {} period vectors, expected {}",
                self.person_id,
                self.captures.len(),
                config.period_count()
            )));
        }
        for (idx, flags) in self.captures.iter().enumerate() {
            if flags.len() != config.source_count() {
                return Err(StrataError::Schema(format!(
                    "record {} period {} has {} source flags, expected {}",
                    self.person_id,
                    config.periods[idx].year,
                    flags.len(),
                    config.source_count()
                )));
            }
        }
        Ok(())
    }
}
