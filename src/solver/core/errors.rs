use super::SettingsError;
use thiserror::Error;

/// Error type returned when a problem is set up with inconsistent data.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProblemError {
    /// Two problem components disagree on the number of variables.
    #[error("Dimension mismatch in {field}: found {found}, expected {expected}")]
    DimensionMismatch {
        field: &'static str,
        found: usize,
        expected: usize,
    },
    /// The feasible set has no simplex blocks.
    #[error("Number of simplex blocks must be positive")]
    EmptyBlocks,
    /// The simplex blocks have no entries.
    #[error("Number of clusters must be positive")]
    EmptyClusters,
}

/// Error type returned by the solvers.
///
/// Running out of iterations is not an error.  It is reported through
/// the solver status instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolverError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Problem(#[from] ProblemError),
    /// Input data containing NaN or Inf
    #[error("Non-finite values in {0}")]
    NonFiniteInput(&'static str),
}
