//! Final report rows for a stratified estimation run
//!
//! Every stratum that had at least one eligible-and-observed person-period
//! row yields exactly one [`StratumSummary`], whether or not a usable
//! estimate was produced.

use serde::Serialize;

use crate::models::types::{RaceCategory, Sex};

/// Per-stratum outcome of capture-matrix construction and estimation
#[derive(Debug, Clone, Serialize)]
pub struct StratumSummary {
    /// Stratum identifier
    pub stratum_id: u32,
    /// Sex component of the stratum key
    pub sex: Sex,
    /// Race category component of the stratum key
    pub race: RaceCategory,
    /// Age band label (e.g., "0-14")
    pub age_band: String,
    /// Calendar year of the period
    pub year: i32,
    /// Number of distinct listed persons in the stratum
    pub n_kids: usize,
    /// Identifiability code returned by the estimator (0 = estimable);
    /// absent when construction or the check itself failed
    pub identifiability: Option<u8>,
    /// Point estimate of the total population, if estimable
    pub point: Option<f64>,
    /// Lower interval bound, if estimable
    pub low: Option<f64>,
    /// Upper interval bound, if estimable
    pub high: Option<f64>,
    /// Estimated hidden population: round(point) minus listed persons
    pub est_unlisted: Option<i64>,
    /// Unlisted-to-listed ratio, rounded to one decimal
    pub ratio: Option<f64>,
    /// Failure note for strata where construction or estimation failed
    pub note: Option<String>,
}

/// The merged report over all strata of a run
#[derive(Debug, Clone, Serialize)]
pub struct StudyReport {
    /// One summary per stratum, sorted by stratum id
    pub rows: Vec<StratumSummary>,
}

impl StudyReport {
    /// Number of strata with a usable estimate
    #[must_use]
    pub fn estimable_count(&self) -> usize {
        self.rows.iter().filter(|r| r.point.is_some()).count()
    }

    /// Render a plain-text summary of the run
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Stratified Estimation Summary:\n");
        summary.push_str(&format!("  Strata: {}\n", self.rows.len()));
        summary.push_str(&format!("  Estimable: {}\n", self.estimable_count()));

        let listed: usize = self.rows.iter().map(|r| r.n_kids).sum();
        summary.push_str(&format!("  Listed Persons (person-periods): {listed}\n"));

        let hidden: i64 = self.rows.iter().filter_map(|r| r.est_unlisted).sum();
        summary.push_str(&format!("  Estimated Hidden (estimable strata): {hidden}\n"));

        for row in &self.rows {
            let code = row
                .identifiability
                .map_or_else(|| "-".to_string(), |c| c.to_string());
            summary.push_str(&format!(
                "  Stratum {}: {:?}/{:?}/{} {} n_kids={} code={}",
                row.stratum_id, row.sex, row.race, row.age_band, row.year, row.n_kids, code
            ));
            match (row.point, row.est_unlisted, row.ratio) {
                (Some(point), Some(unlisted), Some(ratio)) => {
                    summary.push_str(&format!(
                        " point={point:.1} unlisted={unlisted} ratio={ratio}\n"
                    ));
                }
                _ => summary.push('\n'),
            }
        }

        summary
    }

    /// Serialize the report rows as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.rows)
    }
}
