use crate::algebra::*;
use crate::solver::core::ProblemError;

/// Scalar observations over `ntimes` time steps and `nregions` regions.
///
/// The value for time `t` and region `r` is stored at `t*nregions + r`.
/// Each `(t,r)` pair is one simplex block of the assignment problem.

#[derive(Debug, Clone)]
pub struct TimeSeriesData<T> {
    values: Vec<T>,
    ntimes: usize,
    nregions: usize,
}

impl<T> TimeSeriesData<T>
where
    T: FloatT,
{
    pub fn new(values: Vec<T>, ntimes: usize, nregions: usize) -> Result<Self, ProblemError> {
        if ntimes == 0 || nregions == 0 {
            return Err(ProblemError::EmptyBlocks);
        }
        if values.len() != ntimes * nregions {
            return Err(ProblemError::DimensionMismatch {
                field: "data",
                found: values.len(),
                expected: ntimes * nregions,
            });
        }
        Ok(Self {
            values,
            ntimes,
            nregions,
        })
    }

    /// A single time series (one region).
    pub fn from_series(values: Vec<T>) -> Result<Self, ProblemError> {
        let n = values.len();
        Self::new(values, n, 1)
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn ntimes(&self) -> usize {
        self.ntimes
    }

    pub fn nregions(&self) -> usize {
        self.nregions
    }

    /// Number of (time, region) pairs.
    pub fn nblocks(&self) -> usize {
        self.values.len()
    }

    /// Scaling `1/(T*R)` applied to the data fit term.
    pub(crate) fn scale(&self) -> T {
        T::recip(self.nblocks().as_T())
    }
}
