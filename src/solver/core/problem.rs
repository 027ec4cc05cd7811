#![allow(non_snake_case)]
use super::{feasibleset::SimplexSet, ProblemError};
use crate::algebra::*;

/// Simplex constrained quadratic program
///
/// minimize `½ x'Ax - b'x` subject to `x ∈ Ω`
///
/// where Ω is a product of probability simplices.  Solvers start from
/// the projection of `x0` and write the solution to `x`.  Use
/// [`warm_start`](Self::warm_start) to restart from the last solution.

#[derive(Debug)]
pub struct QPProblem<T: FloatT> {
    pub A: Box<dyn MatrixOperator<T>>,
    pub b: Vec<T>,
    pub x0: Vec<T>,
    pub x: Vec<T>,
    pub feasible_set: SimplexSet,
}

impl<T> QPProblem<T>
where
    T: FloatT,
{
    pub fn new(
        A: Box<dyn MatrixOperator<T>>,
        b: Vec<T>,
        x0: Vec<T>,
        feasible_set: SimplexSet,
    ) -> Result<Self, ProblemError> {
        let x = x0.clone();
        let problem = Self {
            A,
            b,
            x0,
            x,
            feasible_set,
        };
        problem.check_dimensions()?;
        Ok(problem)
    }

    /// Number of variables.
    pub fn dim(&self) -> usize {
        self.feasible_set.dim()
    }

    /// Checks that the operator and all vectors agree with the feasible set.
    pub fn check_dimensions(&self) -> Result<(), ProblemError> {
        let n = self.dim();
        let fields = [
            ("A", self.A.dim()),
            ("b", self.b.len()),
            ("x0", self.x0.len()),
            ("x", self.x.len()),
        ];
        for (field, found) in fields {
            if found != n {
                return Err(ProblemError::DimensionMismatch {
                    field,
                    found,
                    expected: n,
                });
            }
        }
        Ok(())
    }

    /// Replace the linear term.
    pub fn update_b(&mut self, b: &[T]) -> Result<(), ProblemError> {
        if b.len() != self.dim() {
            return Err(ProblemError::DimensionMismatch {
                field: "b",
                found: b.len(),
                expected: self.dim(),
            });
        }
        self.b.copy_from(b);
        Ok(())
    }

    /// Start the next solve from the current solution.
    pub fn warm_start(&mut self) {
        self.x0.copy_from(&self.x);
    }

    /// Objective value `½ x'Ax - b'x` at `x`.  Costs one operator apply.
    pub fn objective(&self, x: &[T]) -> T {
        let mut Ax = vec![T::zero(); x.len()];
        self.A.apply(&mut Ax, x);
        let half: T = (0.5).as_T();
        half * Ax.dot(x) - self.b.dot(x)
    }
}
