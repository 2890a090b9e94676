//! Capture-matrix construction
//!
//! The algorithmic core: per stratum, prune sources that carry no
//! information for the estimator, recompute each row's capture pattern over
//! the surviving sources, and collapse identical patterns into
//! pattern/frequency rows.
//!
//! A source is pruned when its singleton contribution is zero, i.e. no row
//! in the stratum was observed by that source alone. Pruning can only create
//! new singletons, never destroy one, so a single pass is idempotent.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::algorithm::strata::StratumTable;
use crate::error::{Result, StrataError};
use crate::models::SourceFlags;

/// A deduplicated capture pattern with its frequency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePattern {
    /// One indicator per surviving source
    pub flags: SourceFlags,
    /// Number of person-period rows with this pattern
    pub count: u32,
}

/// The capture matrix of one stratum: surviving sources plus tallied patterns
#[derive(Debug, Clone)]
pub struct CaptureMatrix {
    /// Id of the stratum this matrix belongs to
    pub stratum_id: u32,
    /// Names of the sources surviving pruning, in column order
    pub sources: Vec<String>,
    /// Distinct patterns with frequencies, in stable order
    pub patterns: Vec<CapturePattern>,
}

impl CaptureMatrix {
    /// Number of surviving sources
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Sum of pattern frequencies, equal to the stratum's row count
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.patterns.iter().map(|p| p.count).sum()
    }

    /// Singleton contribution of each surviving source
    ///
    /// Counts, per source, the rows captured by exactly that source and no
    /// other. Every surviving source has a contribution of at least one.
    #[must_use]
    pub fn singleton_contributions(&self) -> Vec<u32> {
        let mut contributions = vec![0u32; self.sources.len()];
        for pattern in &self.patterns {
            if pattern.flags.iter().filter(|&&f| f).count() == 1 {
                let source = pattern.flags.iter().position(|&f| f).unwrap();
                contributions[source] += pattern.count;
            }
        }
        contributions
    }
}

/// Builds a stratum's capture matrix from its table
pub struct CaptureMatrixBuilder;

impl CaptureMatrixBuilder {
    /// Build the pruned, deduplicated capture matrix for one stratum
    ///
    /// Fails with `EmptyStratum` on a zero-row table and with
    /// `DataIntegrity` when a pattern collapses to the all-zero vector,
    /// which indicates an upstream filtering defect: every row enters with
    /// at least one observed source.
    pub fn build(table: &StratumTable) -> Result<CaptureMatrix> {
        if table.rows.is_empty() {
            return Err(StrataError::EmptyStratum(table.stratum_id));
        }

        let nlists: Vec<usize> = table
            .rows
            .iter()
            .map(|row| row.flags.iter().filter(|&&f| f).count())
            .collect();

        let mut singletons = vec![0u32; table.sources.len()];
        for (row, &n) in table.rows.iter().zip(&nlists) {
            if n == 1 {
                let source = row.flags.iter().position(|&f| f).unwrap();
                singletons[source] += 1;
            }
        }

        let surviving: SmallVec<[usize; 8]> = (0..table.sources.len())
            .filter(|&idx| singletons[idx] > 0)
            .collect();

        if surviving.len() < table.sources.len() {
            let pruned: Vec<&str> = table
                .sources
                .iter()
                .enumerate()
                .filter(|(idx, _)| singletons[*idx] == 0)
                .map(|(_, name)| name.as_str())
                .collect();
            log::debug!(
                "Stratum {}: pruned sources with no singleton contribution: {}",
                table.stratum_id,
                pruned.join(", ")
            );
        }

        let mut tally: FxHashMap<SourceFlags, u32> = FxHashMap::default();
        for row in &table.rows {
            let pattern: SourceFlags = surviving.iter().map(|&idx| row.flags[idx]).collect();
            if !pattern.iter().any(|&f| f) {
                return Err(StrataError::DataIntegrity(table.stratum_id));
            }
            *tally.entry(pattern).or_insert(0) += 1;
        }

        let mut patterns: Vec<CapturePattern> = tally
            .into_iter()
            .map(|(flags, count)| CapturePattern { flags, count })
            .collect();
        patterns.sort_by(|a, b| b.flags.cmp(&a.flags));

        Ok(CaptureMatrix {
            stratum_id: table.stratum_id,
            sources: surviving
                .iter()
                .map(|&idx| table.sources[idx].clone())
                .collect(),
            patterns,
        })
    }
}
