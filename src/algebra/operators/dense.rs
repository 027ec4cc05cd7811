use super::MatrixOperator;
use crate::algebra::{FloatT, OperatorError, VectorMath};

/// Dense square operator stored in row-major order.
///
/// Mostly useful for small problems and testing.  Large regularization
/// operators should be supplied matrix-free.

#[derive(Debug, Clone)]
pub struct DenseOperator<T> {
    n: usize,
    data: Vec<T>,
    coeff: T,
}

impl<T> DenseOperator<T>
where
    T: FloatT,
{
    /// Create an `n x n` operator from row-major `data`, with unit coefficient.
    pub fn new(n: usize, data: Vec<T>) -> Result<Self, OperatorError> {
        if n == 0 {
            return Err(OperatorError::EmptyOperator);
        }
        if data.len() != n * n {
            return Err(OperatorError::IncompatibleDimension {
                len: data.len(),
                expected: n * n,
            });
        }
        Ok(Self {
            n,
            data,
            coeff: T::one(),
        })
    }

    /// The `n x n` zero operator.
    pub fn zeros(n: usize) -> Result<Self, OperatorError> {
        Self::new(n, vec![T::zero(); n * n])
    }

    /// The `n x n` identity.
    pub fn identity(n: usize) -> Result<Self, OperatorError> {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self::new(n, data)
    }

    /// Entry `(i,j)` of the unscaled matrix.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.n + j]
    }
}

impl<T> MatrixOperator<T> for DenseOperator<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.n
    }

    fn apply(&self, y: &mut [T], x: &[T]) {
        assert_eq!(y.len(), self.n);
        assert_eq!(x.len(), self.n);

        for (yi, row) in y.iter_mut().zip(self.data.chunks_exact(self.n)) {
            *yi = self.coeff * row.dot(x);
        }
    }

    fn coeff(&self) -> T {
        self.coeff
    }

    fn set_coeff(&mut self, coeff: T) {
        self.coeff = coeff;
    }

    fn name(&self) -> &'static str {
        "dense"
    }
}
