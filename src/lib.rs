//! A Rust library for converting person-level, multi-year, multi-source
//! observation records into the stratified capture-history matrices required
//! by a sparse-data multiple-systems population-size estimator, and for
//! orchestrating the estimator over every stratum.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod estimator;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{AgePartition, Period, StudyConfig};
pub use error::{Result, StrataError};
pub use models::{
    ObservationRecord, PersonPeriodRecord, RaceCategory, Sex, SourceFlags, Stratum, StratumKey,
    StratumSummary, StudyReport,
};

// Pipeline stages
pub use algorithm::{
    CaptureMatrix, CaptureMatrixBuilder, CapturePattern, EligibilityFilter, PersonPeriodExpander,
    StratumAssigner, StratumOrchestrator, StratumTable, StratumTableBuilder, run_study,
};

// Estimator contract
pub use estimator::{Identifiability, PopulationEstimate, PopulationEstimator};
