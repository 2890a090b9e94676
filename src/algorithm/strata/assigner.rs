//! Stratum assignment
//!
//! Partitions person-period rows into disjoint strata keyed by demographics
//! and period. Ids are dense integers assigned in sorted key order; they
//! carry no meaning beyond uniqueness within a run.

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Result, StrataError};
use crate::models::{PersonPeriodRecord, Stratum, StratumKey};

/// Groups person-period rows into strata and assigns ids
pub struct StratumAssigner;

impl StratumAssigner {
    /// Partition rows into strata with dense ids starting at 1
    ///
    /// Every row lands in exactly one stratum; `n_kids` counts distinct
    /// person ids per stratum. Fails with `EmptyCohort` when no rows are
    /// given.
    pub fn assign(rows: Vec<PersonPeriodRecord>) -> Result<Vec<Stratum>> {
        if rows.is_empty() {
            return Err(StrataError::EmptyCohort);
        }

        let mut groups: FxHashMap<StratumKey, Vec<PersonPeriodRecord>> = FxHashMap::default();
        for row in rows {
            groups.entry(row.stratum_key()).or_default().push(row);
        }

        let strata: Vec<Stratum> = groups
            .into_iter()
            .sorted_by_key(|(key, _)| *key)
            .enumerate()
            .map(|(idx, (key, rows))| {
                let n_kids = rows
                    .iter()
                    .map(|r| r.person_id.as_str())
                    .collect::<FxHashSet<_>>()
                    .len();
                Stratum {
                    id: idx as u32 + 1,
                    key,
                    n_kids,
                    rows,
                }
            })
            .collect();

        log::info!(
            "Assigned {} person-period rows to {} strata",
            strata.iter().map(Stratum::row_count).sum::<usize>(),
            strata.len()
        );

        Ok(strata)
    }
}
