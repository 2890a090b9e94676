//! External estimator contract
//!
//! The statistical estimator is an opaque collaborator: given a stratum's
//! capture matrix it decides identifiability and, when possible, produces a
//! population point estimate with an interval. Its internal model search is
//! out of scope here; consumers supply an implementation of
//! [`PopulationEstimator`] and tests use stubs.

use serde::Serialize;

use crate::algorithm::capture::CaptureMatrix;
use crate::error::Result;

/// Outcome of the estimator's identifiability check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifiability {
    /// Code 0: a consistent estimate is possible
    Estimable,
    /// Code 1: the maximum-likelihood estimate may not exist
    MleExistence,
    /// Code 2: the matrix is not identifiable
    NotIdentifiable,
    /// Code 3: both MLE-existence and identifiability issues
    Both,
}

impl Identifiability {
    /// Raw integer code, per the estimator contract
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Estimable => 0,
            Self::MleExistence => 1,
            Self::NotIdentifiable => 2,
            Self::Both => 3,
        }
    }

    /// Parse a raw code; `None` for anything outside {0, 1, 2, 3}
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Estimable),
            1 => Some(Self::MleExistence),
            2 => Some(Self::NotIdentifiable),
            3 => Some(Self::Both),
            _ => None,
        }
    }

    /// Whether a population estimate may be requested
    #[must_use]
    pub const fn is_estimable(self) -> bool {
        matches!(self, Self::Estimable)
    }
}

/// Point estimate with interval bounds at the requested quantiles
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PopulationEstimate {
    /// Point estimate of the total population
    pub point: f64,
    /// Lower interval bound
    pub low: f64,
    /// Upper interval bound
    pub high: f64,
}

/// Contract with the external population-size estimator
///
/// Implementations must be callable from parallel per-stratum workers; the
/// calls are synchronous, bounded units of work with no coordination
/// between strata.
pub trait PopulationEstimator: Send + Sync {
    /// Check whether a consistent estimate can be derived from the matrix
    fn check_identifiability(&self, matrix: &CaptureMatrix) -> Result<Identifiability>;

    /// Estimate the total population at the given interval quantiles
    ///
    /// Fails with `NonEstimable` when the matrix's identifiability code is
    /// nonzero.
    fn estimate_population(
        &self,
        matrix: &CaptureMatrix,
        quantiles: (f64, f64),
    ) -> Result<PopulationEstimate>;
}
