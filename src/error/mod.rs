//! Error handling for the stratification pipeline.

/// Specialized error type for stratification and estimation runs
#[derive(Debug, thiserror::Error)]
pub enum StrataError {
    /// No records survived eligibility filtering
    #[error("empty cohort: no records are both eligible and observed in any period")]
    EmptyCohort,

    /// A capture pattern collapsed to the all-zero vector after pruning
    #[error("data integrity violation in stratum {0}: all-zero capture pattern")]
    DataIntegrity(u32),

    /// A stratum table arrived with no rows
    #[error("stratum {0} contains no person-period rows")]
    EmptyStratum(u32),

    /// A population estimate was requested for a non-estimable matrix
    #[error("matrix is not estimable (identifiability code {0})")]
    NonEstimable(u8),

    /// The external estimator failed or returned malformed data
    #[error("estimator failure in stratum {0}: {1}")]
    EstimatorFailure(u32, String),

    /// Error in the study configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Error with input data shape
    #[error("schema error: {0}")]
    Schema(String),
}

/// Result type for stratification operations
pub type Result<T> = std::result::Result<T, StrataError>;
