//! Shared fixtures and stub estimators for integration tests
#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use smallvec::smallvec;

use mse_strata::estimator::{Identifiability, PopulationEstimate, PopulationEstimator};
use mse_strata::{
    AgePartition, CaptureMatrix, ObservationRecord, Period, RaceCategory, Result, Sex,
    SourceFlags, StrataError, StudyConfig,
};

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Three periods with disjoint birth windows, three sources, two age bands
pub fn test_config() -> StudyConfig {
    StudyConfig::new(
        vec![
            Period::new(2017, ymd(2000, 1, 1), ymd(2004, 12, 31)),
            Period::new(2018, ymd(2005, 1, 1), ymd(2009, 12, 31)),
            Period::new(2019, ymd(2010, 1, 1), ymd(2014, 12, 31)),
        ],
        vec!["A".to_string(), "B".to_string(), "C".to_string()],
        AgePartition::new(vec![14]),
    )
}

pub fn flags(a: bool, b: bool, c: bool) -> SourceFlags {
    smallvec![a, b, c]
}

pub fn no_flags() -> SourceFlags {
    smallvec![false, false, false]
}

/// A record observed in exactly one period with the given flags
pub fn record_observed_in(
    person_id: &str,
    birth_date: NaiveDate,
    period_idx: usize,
    period_flags: SourceFlags,
) -> ObservationRecord {
    record_with(
        person_id,
        Sex::Male,
        RaceCategory::White,
        birth_date,
        period_idx,
        period_flags,
    )
}

/// A record with explicit demographics, observed in exactly one period
pub fn record_with(
    person_id: &str,
    sex: Sex,
    race: RaceCategory,
    birth_date: NaiveDate,
    period_idx: usize,
    period_flags: SourceFlags,
) -> ObservationRecord {
    let mut captures = vec![no_flags(), no_flags(), no_flags()];
    captures[period_idx] = period_flags;
    ObservationRecord::new(person_id, sex, race, birth_date, captures)
}

/// Estimator that returns a fixed code and derives the estimate from the
/// matrix's row count (point = 2n, interval n..4n)
pub struct StubEstimator {
    pub code: Identifiability,
}

impl StubEstimator {
    pub fn estimable() -> Self {
        Self {
            code: Identifiability::Estimable,
        }
    }
}

impl PopulationEstimator for StubEstimator {
    fn check_identifiability(&self, _matrix: &CaptureMatrix) -> Result<Identifiability> {
        Ok(self.code)
    }

    fn estimate_population(
        &self,
        matrix: &CaptureMatrix,
        _quantiles: (f64, f64),
    ) -> Result<PopulationEstimate> {
        if !self.code.is_estimable() {
            return Err(StrataError::NonEstimable(self.code.code()));
        }
        let n = f64::from(matrix.total_count());
        Ok(PopulationEstimate {
            point: n * 2.0,
            low: n,
            high: n * 4.0,
        })
    }
}

/// Estimator with per-stratum identifiability codes and a default
pub struct KeyedEstimator {
    pub codes: HashMap<u32, Identifiability>,
    pub default: Identifiability,
}

impl PopulationEstimator for KeyedEstimator {
    fn check_identifiability(&self, matrix: &CaptureMatrix) -> Result<Identifiability> {
        Ok(*self.codes.get(&matrix.stratum_id).unwrap_or(&self.default))
    }

    fn estimate_population(
        &self,
        matrix: &CaptureMatrix,
        quantiles: (f64, f64),
    ) -> Result<PopulationEstimate> {
        let code = self.check_identifiability(matrix)?;
        if !code.is_estimable() {
            return Err(StrataError::NonEstimable(code.code()));
        }
        StubEstimator::estimable().estimate_population(matrix, quantiles)
    }
}

/// Estimator that fails outright for one stratum and works for the rest
pub struct FailingEstimator {
    pub failing_stratum: u32,
}

impl PopulationEstimator for FailingEstimator {
    fn check_identifiability(&self, matrix: &CaptureMatrix) -> Result<Identifiability> {
        if matrix.stratum_id == self.failing_stratum {
            return Err(StrataError::EstimatorFailure(
                matrix.stratum_id,
                "search did not converge".to_string(),
            ));
        }
        Ok(Identifiability::Estimable)
    }

    fn estimate_population(
        &self,
        matrix: &CaptureMatrix,
        quantiles: (f64, f64),
    ) -> Result<PopulationEstimate> {
        StubEstimator::estimable().estimate_population(matrix, quantiles)
    }
}
