#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of solver at termination

#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Solver terminated on one of its stopping criteria.
    Solved,
    /// Iteration limit reached before any stopping criterion was met.
    MaxIterations,
    /// Non-positive curvature along the search direction.  The last
    /// accepted iterate is returned.
    NumericDegeneracy,
    /// Terminated by a user callback.
    CallbackTerminated,
}

impl SolverStatus {
    /// True if the solver stopped on a convergence test.
    pub fn is_solved(&self) -> bool {
        matches!(*self, SolverStatus::Solved)
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The stopping test that produced [`SolverStatus::Solved`].

#[derive(PartialEq, Eq, Clone, Debug, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopCriterion {
    /// squared projected step `d'd` below tolerance
    ProjectedStep,
    /// change in objective value below tolerance
    ObjectiveChange,
    /// `d'd` below tolerance relative to `‖b‖`
    StepNormRelative,
    /// curvature `d'Ad` below tolerance
    Curvature,
    /// `d'Ad` below tolerance relative to `‖b‖`
    CurvatureRelative,
    /// change in outer objective value below tolerance
    OuterObjectiveChange,
}

impl std::fmt::Display for StopCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            StopCriterion::ProjectedStep => "d'd < eps",
            StopCriterion::ObjectiveChange => "|f - f_old| < eps",
            StopCriterion::StepNormRelative => "d'd < eps*|b|",
            StopCriterion::Curvature => "d'Ad < eps",
            StopCriterion::CurvatureRelative => "d'Ad < eps*|b|",
            StopCriterion::OuterObjectiveChange => "|L - L_old| < eps",
        };
        write!(f, "{}", s)
    }
}
