//! Eligibility filtering and person-period expansion
//!
//! Eligibility is a function of birth date and each period's fixed,
//! non-overlapping eligibility window. A record survives filtering when at
//! least one period is both eligible and observed; expansion then explodes
//! each surviving record into one row per such period.

use crate::config::{StudyConfig, age_in_period};
use crate::models::{ObservationRecord, PersonPeriodRecord};

/// Filters out records never eligible-and-observed in any period
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// Keep records with at least one eligible-and-observed period
    #[must_use]
    pub fn apply(records: Vec<ObservationRecord>, config: &StudyConfig) -> Vec<ObservationRecord> {
        let total = records.len();
        let kept: Vec<ObservationRecord> = records
            .into_iter()
            .filter(|record| {
                config
                    .periods
                    .iter()
                    .enumerate()
                    .any(|(idx, period)| {
                        period.contains(&record.birth_date) && record.observed_in(idx)
                    })
            })
            .collect();

        log::info!(
            "Eligibility filter kept {} of {} records",
            kept.len(),
            total
        );

        kept
    }
}

/// Explodes records into one row per eligible-and-observed (person, period)
pub struct PersonPeriodExpander;

impl PersonPeriodExpander {
    /// Expand records into person-period rows
    ///
    /// Periods where the person was observed but not eligible are dropped
    /// silently; that is expected filtering, not an error.
    #[must_use]
    pub fn expand(records: &[ObservationRecord], config: &StudyConfig) -> Vec<PersonPeriodRecord> {
        let mut rows = Vec::new();
        let mut dropped = 0usize;

        for record in records {
            for (idx, period) in config.periods.iter().enumerate() {
                if !record.observed_in(idx) {
                    continue;
                }
                if !period.contains(&record.birth_date) {
                    dropped += 1;
                    continue;
                }
                let age = age_in_period(&record.birth_date, period.year);
                rows.push(PersonPeriodRecord {
                    person_id: record.person_id.clone(),
                    year: period.year,
                    sex: record.sex,
                    race: record.race,
                    age,
                    age_band: config.age_partition.band_of(age),
                    flags: record.captures[idx].clone(),
                });
            }
        }

        log::info!(
            "Expanded {} records into {} person-period rows ({} observed-but-ineligible periods dropped)",
            records.len(),
            rows.len(),
            dropped
        );

        rows
    }
}
