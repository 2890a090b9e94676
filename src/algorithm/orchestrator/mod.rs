//! Per-stratum orchestration of matrix construction and estimation
//!
//! Strata share no mutable state and are processed in parallel. Each
//! stratum yields exactly one summary row regardless of outcome: failures
//! inside one stratum are caught and recorded locally and never abort
//! sibling strata. Results are merged and sorted by stratum id, independent
//! of worker completion order.

use rayon::prelude::*;

use crate::algorithm::capture::CaptureMatrixBuilder;
use crate::algorithm::eligibility::{EligibilityFilter, PersonPeriodExpander};
use crate::algorithm::strata::{StratumAssigner, StratumTableBuilder};
use crate::config::StudyConfig;
use crate::error::{Result, StrataError};
use crate::estimator::PopulationEstimator;
use crate::models::{ObservationRecord, Stratum, StratumSummary, StudyReport};
use crate::utils::logging::{create_main_progress_bar, finish_progress_bar};

/// Interval quantiles requested from the estimator
pub const ESTIMATE_QUANTILES: (f64, f64) = (0.025, 0.975);

/// Drives capture-matrix construction and estimation over every stratum
pub struct StratumOrchestrator<'a> {
    estimator: &'a dyn PopulationEstimator,
    show_progress: bool,
}

impl<'a> StratumOrchestrator<'a> {
    /// Create an orchestrator over the given estimator
    #[must_use]
    pub fn new(estimator: &'a dyn PopulationEstimator) -> Self {
        Self {
            estimator,
            show_progress: false,
        }
    }

    /// Enable or disable progress-bar reporting
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Process every stratum independently and merge into one report
    #[must_use]
    pub fn run(&self, strata: &[Stratum], config: &StudyConfig) -> StudyReport {
        let pb = if self.show_progress {
            Some(create_main_progress_bar(
                strata.len() as u64,
                Some("Estimating strata"),
            ))
        } else {
            None
        };

        let mut rows: Vec<StratumSummary> = strata
            .par_iter()
            .map(|stratum| {
                let summary = self.process_stratum(stratum, config);
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
                summary
            })
            .collect();

        rows.sort_by_key(|row| row.stratum_id);

        if let Some(pb) = &pb {
            finish_progress_bar(pb, Some("Estimation complete"));
        }

        log::info!(
            "Processed {} strata, {} estimable",
            rows.len(),
            rows.iter().filter(|r| r.point.is_some()).count()
        );

        StudyReport { rows }
    }

    /// Build the matrix and run the estimator for one stratum
    ///
    /// Always returns a summary row; every failure is contained here.
    fn process_stratum(&self, stratum: &Stratum, config: &StudyConfig) -> StratumSummary {
        let mut summary = empty_summary(stratum, config);

        let table = StratumTableBuilder::build(stratum, config);
        let matrix = match CaptureMatrixBuilder::build(&table) {
            Ok(matrix) => matrix,
            Err(err) => {
                log::warn!("Stratum {}: {err}", stratum.id);
                summary.note = Some(err.to_string());
                return summary;
            }
        };

        let code = match self.estimator.check_identifiability(&matrix) {
            Ok(code) => code,
            Err(err) => {
                let err = StrataError::EstimatorFailure(stratum.id, err.to_string());
                log::warn!("{err}");
                summary.note = Some(err.to_string());
                return summary;
            }
        };
        summary.identifiability = Some(code.code());

        if !code.is_estimable() {
            log::debug!(
                "Stratum {}: not estimable (code {})",
                stratum.id,
                code.code()
            );
            return summary;
        }

        match self
            .estimator
            .estimate_population(&matrix, ESTIMATE_QUANTILES)
        {
            Ok(estimate) => {
                let est_unlisted = estimate.point.round() as i64 - stratum.n_kids as i64;
                summary.point = Some(estimate.point);
                summary.low = Some(estimate.low);
                summary.high = Some(estimate.high);
                summary.est_unlisted = Some(est_unlisted);
                summary.ratio = Some(round_one_decimal(
                    est_unlisted as f64 / stratum.n_kids as f64,
                ));
            }
            Err(err) => {
                let err = StrataError::EstimatorFailure(stratum.id, err.to_string());
                log::warn!("{err}");
                summary.note = Some(err.to_string());
            }
        }

        summary
    }
}

/// Run the full pipeline: validate, filter, expand, stratify, estimate
///
/// This is the crate's main operation. Structural failures (configuration,
/// record shape, empty cohort) abort the run; per-stratum failures are
/// contained and reported in the summary rows.
pub fn run_study(
    records: Vec<ObservationRecord>,
    config: &StudyConfig,
    estimator: &dyn PopulationEstimator,
) -> Result<StudyReport> {
    config.validate()?;
    for record in &records {
        record.validate_shape(config)?;
    }

    let filtered = EligibilityFilter::apply(records, config);
    if filtered.is_empty() {
        return Err(StrataError::EmptyCohort);
    }

    let rows = PersonPeriodExpander::expand(&filtered, config);
    let strata = StratumAssigner::assign(rows)?;

    Ok(StratumOrchestrator::new(estimator).run(&strata, config))
}

fn empty_summary(stratum: &Stratum, config: &StudyConfig) -> StratumSummary {
    StratumSummary {
        stratum_id: stratum.id,
        sex: stratum.key.sex,
        race: stratum.key.race,
        age_band: config.age_partition.label(stratum.key.age_band),
        year: stratum.key.year,
        n_kids: stratum.n_kids,
        identifiability: None,
        point: None,
        low: None,
        high: None,
        est_unlisted: None,
        ratio: None,
        note: None,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
