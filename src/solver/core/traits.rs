//! Contract between the outer solvers and the constrained QP backends.

use super::{problem::QPProblem, SolverError};
use crate::algebra::*;
use crate::solver::implementations::spgqp::{SpgInfo, SpgSolver};
use enum_dispatch::*;

/// A solver for simplex constrained QPs.
///
/// On return `problem.x` holds the final iterate, which is always feasible.

#[enum_dispatch]
pub trait ConstrainedQPSolver<T>
where
    T: FloatT,
{
    fn solve(&mut self, problem: &mut QPProblem<T>) -> Result<SpgInfo<T>, SolverError>;

    /// Long form solver name for printing.
    fn name(&self) -> &'static str;
}

/// Selectable QP backend.

#[enum_dispatch(ConstrainedQPSolver<T>)]
#[derive(Debug)]
pub enum QPSolverBackend<T>
where
    T: FloatT,
{
    SpgSolver(SpgSolver<T>),
}
