#![allow(non_snake_case)]
use super::MatrixOperator;
use crate::algebra::{FloatT, OperatorError};

/// Matrix-free graph Laplacian of a 1-D time chain.
///
/// Acts on assignment vectors laid out block-contiguously, i.e. the entry
/// for time `t`, region `r` and cluster `k` lives at `((t*R + r)*K + k)`.
/// Each region carries its own chain `0 - 1 - ... - (T-1)` in time, and
/// the chain is replicated once per cluster.  Cluster `k` is additionally
/// scaled by a weight `w[k]` (unit by default), so that
///
/// `y[t,r,k] = coeff * w[k] * (deg(t) x[t,r,k] - x[t-1,r,k] - x[t+1,r,k])`
///
/// with missing neighbours dropped at the chain ends.

#[derive(Debug, Clone)]
pub struct ChainLaplacianOperator<T> {
    ntimes: usize,
    nregions: usize,
    nclusters: usize,
    coeff: T,
    weights: Vec<T>,
}

impl<T> ChainLaplacianOperator<T>
where
    T: FloatT,
{
    /// Chain over `ntimes` time steps for each of `nregions` regions,
    /// replicated for `nclusters` clusters.
    pub fn new(
        ntimes: usize,
        nregions: usize,
        nclusters: usize,
        coeff: T,
    ) -> Result<Self, OperatorError> {
        if ntimes == 0 || nregions == 0 || nclusters == 0 {
            return Err(OperatorError::EmptyOperator);
        }
        Ok(Self {
            ntimes,
            nregions,
            nclusters,
            coeff,
            weights: vec![T::one(); nclusters],
        })
    }

    pub fn weights(&self) -> &[T] {
        &self.weights
    }
}

impl<T> MatrixOperator<T> for ChainLaplacianOperator<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.ntimes * self.nregions * self.nclusters
    }

    fn apply(&self, y: &mut [T], x: &[T]) {
        assert_eq!(y.len(), self.dim());
        assert_eq!(x.len(), self.dim());

        let (K, R) = (self.nclusters, self.nregions);
        // distance between neighbouring times in the flat layout
        let stride = R * K;

        for t in 0..self.ntimes {
            let has_prev = t > 0;
            let has_next = t + 1 < self.ntimes;
            let deg = T::from_u8(has_prev as u8 + has_next as u8).unwrap_or_else(T::zero);

            for r in 0..R {
                let base = (t * R + r) * K;
                for k in 0..K {
                    let i = base + k;
                    let mut v = deg * x[i];
                    if has_prev {
                        v -= x[i - stride];
                    }
                    if has_next {
                        v -= x[i + stride];
                    }
                    y[i] = self.coeff * self.weights[k] * v;
                }
            }
        }
    }

    fn coeff(&self) -> T {
        self.coeff
    }

    fn set_coeff(&mut self, coeff: T) {
        self.coeff = coeff;
    }

    fn set_cluster_weights(&mut self, weights: &[T]) {
        assert_eq!(weights.len(), self.nclusters);
        self.weights.copy_from_slice(weights);
    }

    fn name(&self) -> &'static str {
        "chain laplacian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::VectorMath;

    #[test]
    fn test_chain_constant_in_nullspace() {
        // constant-in-time assignments carry no penalty
        let A = ChainLaplacianOperator::<f64>::new(5, 2, 3, 10.0).unwrap();
        let x: Vec<f64> = (0..A.dim()).map(|i| (i % 3) as f64).collect();
        let mut y = vec![1.0; A.dim()];
        A.apply(&mut y, &x);
        assert_eq!(y.norm_inf(), 0.0);
    }

    #[test]
    fn test_chain_single_cluster_path() {
        // T = 3, R = 1, K = 1 is the usual path Laplacian [1 -1 0;-1 2 -1;0 -1 1]
        let mut A = ChainLaplacianOperator::<f64>::new(3, 1, 1, 1.0).unwrap();
        let x = [1., 2., 4.];
        let mut y = [0.; 3];
        A.apply(&mut y, &x);
        assert_eq!(y, [-1., -1., 2.]);

        A.set_coeff(2.0);
        A.set_cluster_weights(&[0.5]);
        A.apply(&mut y, &x);
        assert_eq!(y, [-1., -1., 2.]);
    }

    #[test]
    fn test_chain_cluster_weights() {
        let mut A = ChainLaplacianOperator::<f64>::new(2, 1, 2, 1.0).unwrap();
        A.set_cluster_weights(&[1.0, 3.0]);
        // times 0 and 1, clusters 0 and 1
        let x = [1., 0., 0., 1.];
        let mut y = [0.; 4];
        A.apply(&mut y, &x);
        assert_eq!(y, [1., -3., -1., 3.]);
    }
}
