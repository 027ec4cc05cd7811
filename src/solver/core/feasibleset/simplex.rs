#![allow(non_snake_case)]
use crate::algebra::*;
use crate::solver::core::ProblemError;
use rand::Rng;
use std::cmp::Ordering;

cfg_if::cfg_if! {
    if #[cfg(feature = "parallel")] {
        use rayon::prelude::*;
    }
}

/// Number of blocks from which [`SimplexSet::project`] splits work across
/// the rayon thread pool.  Only used with the `parallel` feature.
pub const PARALLEL_MIN_BLOCKS: usize = 1024;

/// Cartesian product of `nblocks` probability simplices of dimension `K`.
///
/// A vector `x` of length `nblocks * K` is feasible if every block
/// `x[t*K .. (t+1)*K]` is nonnegative and sums to one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplexSet {
    nblocks: usize,
    K: usize,
}

impl SimplexSet {
    pub fn new(nblocks: usize, K: usize) -> Result<Self, ProblemError> {
        if nblocks == 0 {
            return Err(ProblemError::EmptyBlocks);
        }
        if K == 0 {
            return Err(ProblemError::EmptyClusters);
        }
        Ok(Self { nblocks, K })
    }

    pub fn nblocks(&self) -> usize {
        self.nblocks
    }

    pub fn block_size(&self) -> usize {
        self.K
    }

    pub fn dim(&self) -> usize {
        self.nblocks * self.K
    }

    /// Euclidean projection of `x` onto the set, in place.
    ///
    /// Blocks containing NaN or Inf are replaced by the uniform point.
    pub fn project<T: FloatT>(&self, x: &mut [T]) {
        assert_eq!(x.len(), self.dim());

        cfg_if::cfg_if! {
            if #[cfg(feature = "parallel")] {
                if self.nblocks >= PARALLEL_MIN_BLOCKS {
                    x.par_chunks_mut(self.K).for_each_init(
                        || Vec::with_capacity(self.K),
                        |work, block| project_block(block, work),
                    );
                    return;
                }
            }
        }

        let mut work = Vec::with_capacity(self.K);
        x.chunks_mut(self.K)
            .for_each(|block| project_block(block, &mut work));
    }

    /// Checks that every block sums to one within `tol` and has no entry
    /// below `-tol`.
    pub fn is_feasible<T: FloatT>(&self, x: &[T], tol: T) -> bool {
        x.len() == self.dim()
            && x.chunks(self.K).all(|block| {
                T::abs(block.sum() - T::one()) <= tol && block.minimum() >= -tol
            })
    }

    /// Sets every block to the barycentre `1/K`.
    pub fn set_uniform<T: FloatT>(&self, x: &mut [T]) {
        assert_eq!(x.len(), self.dim());
        x.set(T::recip(self.K.as_T()));
    }

    /// Draws every entry uniformly from `[0,1)` and projects.
    pub fn set_random<T, R>(&self, x: &mut [T], rng: &mut R)
    where
        T: FloatT,
        R: Rng + ?Sized,
    {
        assert_eq!(x.len(), self.dim());
        for v in x.iter_mut() {
            *v = rng.random::<f64>().as_T();
        }
        self.project(x);
    }
}

// Projection of a single block onto the simplex by sorting and
// searching for the shift τ with sum(max(x - τ, 0)) = 1.
fn project_block<T: FloatT>(x: &mut [T], work: &mut Vec<T>) {
    let K = x.len();

    if !x.is_finite() {
        x.set(T::recip(K.as_T()));
        return;
    }

    let total = x.sum();
    if total == T::one() && x.minimum() >= T::zero() {
        return;
    }

    work.clear();
    work.extend_from_slice(x);
    work.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut τ = (total - T::one()) / K.as_T();
    let mut tail = T::zero();
    for i in (1..K).rev() {
        tail += work[i];
        let ti = (tail - T::one()) / (K - i).as_T();
        if ti >= work[i - 1] {
            τ = ti;
            break;
        }
    }

    x.scalarop(|v| T::max(v - τ, T::zero()));
}
