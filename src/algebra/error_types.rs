use thiserror::Error;

/// Error type returned when constructing a [`MatrixOperator`](crate::algebra::MatrixOperator)
/// from user data.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OperatorError {
    /// Data array length does not match the requested operator size
    #[error("Operator data has length {len}, expected {expected}")]
    IncompatibleDimension { len: usize, expected: usize },
    /// An operator with no rows was requested
    #[error("Operator dimension must be positive")]
    EmptyOperator,
}
