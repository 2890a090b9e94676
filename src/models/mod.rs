//! Domain models for the stratification pipeline

pub mod observation;
pub mod person_period;
pub mod report;
pub mod stratum;
pub mod types;

pub use observation::{ObservationRecord, SourceFlags};
pub use person_period::PersonPeriodRecord;
pub use report::{StratumSummary, StudyReport};
pub use stratum::{Stratum, StratumKey};
pub use types::{RaceCategory, Sex};
