//! Stratum assignment and per-stratum table construction

pub mod assigner;
pub mod table;

pub use assigner::StratumAssigner;
pub use table::{StratumTable, StratumTableBuilder, TableRow};
