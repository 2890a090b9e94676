//! Algorithms for stratified capture-history analysis
//!
//! This module contains the pipeline stages: eligibility filtering and
//! person-period expansion, stratum assignment and table construction,
//! capture-matrix construction, and per-stratum orchestration of the
//! external estimator.

pub mod capture;
pub mod eligibility;
pub mod orchestrator;
pub mod strata;

pub use capture::{CaptureMatrix, CaptureMatrixBuilder, CapturePattern};
pub use eligibility::{EligibilityFilter, PersonPeriodExpander};
pub use orchestrator::{ESTIMATE_QUANTILES, StratumOrchestrator, run_study};
pub use strata::{StratumAssigner, StratumTable, StratumTableBuilder, TableRow};
