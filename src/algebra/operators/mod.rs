//! Linear operators consumed by the QP solvers.
//!
//! The solvers never look inside an operator.  All they need is the
//! scaled product `y = coeff * A * x` and the ability to read or change
//! the scalar `coeff` between solves.  Operators may be matrix-free.

use super::FloatT;

mod chain;
mod dense;
mod diagonal;

pub use chain::*;
pub use dense::*;
pub use diagonal::*;

/// A fixed linear operator `A` scaled by a mutable coefficient.

pub trait MatrixOperator<T: FloatT> {
    /// Number of rows (and columns) of the operator.
    fn dim(&self) -> usize;

    /// Produces `y = coeff * A * x`.  `y` is overwritten.
    fn apply(&self, y: &mut [T], x: &[T]);

    /// Current scaling coefficient.
    fn coeff(&self) -> T;

    /// Replace the scaling coefficient.
    fn set_coeff(&mut self, coeff: T);

    /// Set per-cluster multipliers on the operator blocks.
    ///
    /// Operators without a cluster structure ignore this, which is the
    /// default behaviour.
    fn set_cluster_weights(&mut self, _weights: &[T]) {}

    /// Short human readable description used in solver printouts.
    fn name(&self) -> &'static str {
        "operator"
    }
}

impl<T: FloatT> std::fmt::Debug for dyn MatrixOperator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(dim = {})", self.name(), self.dim())
    }
}
