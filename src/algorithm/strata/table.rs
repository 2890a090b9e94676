//! Stratum capture tables
//!
//! Reconstitutes, per stratum, one row per (person, period) with one boolean
//! column per configured source. A combination the person did not trigger is
//! `false`: absence of observation, not missing data.

use smallvec::smallvec;

use crate::config::StudyConfig;
use crate::models::{SourceFlags, Stratum};

/// One row of a stratum's capture table
#[derive(Debug, Clone)]
pub struct TableRow {
    /// Personal identifier
    pub person_id: String,
    /// Calendar year of the period
    pub year: i32,
    /// One indicator per configured source
    pub flags: SourceFlags,
}

/// A stratum's table of per-source observation indicators
#[derive(Debug, Clone)]
pub struct StratumTable {
    /// Id of the stratum this table belongs to
    pub stratum_id: u32,
    /// Source names, in column order
    pub sources: Vec<String>,
    /// One row per (person, period) pair
    pub rows: Vec<TableRow>,
}

/// Builds the per-stratum capture table
pub struct StratumTableBuilder;

impl StratumTableBuilder {
    /// Build the capture table for one stratum
    #[must_use]
    pub fn build(stratum: &Stratum, config: &StudyConfig) -> StratumTable {
        let width = config.source_count();
        let rows = stratum
            .rows
            .iter()
            .map(|row| {
                let mut flags: SourceFlags = smallvec![false; width];
                for (idx, &observed) in row.flags.iter().take(width).enumerate() {
                    flags[idx] = observed;
                }
                TableRow {
                    person_id: row.person_id.clone(),
                    year: row.year,
                    flags,
                }
            })
            .collect();

        StratumTable {
            stratum_id: stratum.id,
            sources: config.sources.clone(),
            rows,
        }
    }
}
