use super::MatrixOperator;
use crate::algebra::{FloatT, OperatorError};
use std::iter::zip;

/// Diagonal operator `coeff * Diagonal(d)`.

#[derive(Debug, Clone)]
pub struct DiagonalOperator<T> {
    diag: Vec<T>,
    coeff: T,
}

impl<T> DiagonalOperator<T>
where
    T: FloatT,
{
    pub fn new(diag: Vec<T>) -> Result<Self, OperatorError> {
        if diag.is_empty() {
            return Err(OperatorError::EmptyOperator);
        }
        Ok(Self {
            diag,
            coeff: T::one(),
        })
    }

    pub fn diag(&self) -> &[T] {
        &self.diag
    }
}

impl<T> MatrixOperator<T> for DiagonalOperator<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.diag.len()
    }

    fn apply(&self, y: &mut [T], x: &[T]) {
        assert_eq!(y.len(), self.diag.len());
        assert_eq!(x.len(), self.diag.len());

        for (yi, (&di, &xi)) in zip(y, zip(&self.diag, x)) {
            *yi = self.coeff * di * xi;
        }
    }

    fn coeff(&self) -> T {
        self.coeff
    }

    fn set_coeff(&mut self, coeff: T) {
        self.coeff = coeff;
    }

    fn name(&self) -> &'static str {
        "diagonal"
    }
}
