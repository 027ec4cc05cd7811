//! Solver main module.
//!
//! This module contains the simplex constrained QP solver
//! ([`SpgSolver`]) and the alternating clustering solver built on top of
//! it ([`AlternatingSolver`]).
//!
//! Additional QP backends can be provided by implementing the
//! [`ConstrainedQPSolver`](crate::solver::traits::ConstrainedQPSolver)
//! trait and adding a variant to
//! [`QPSolverBackend`](crate::solver::traits::QPSolverBackend).

// internal module structure
pub(crate) mod core;
pub mod implementations;

//Here we expose only part of the solver internals
//and rearrange public modules a bit to give a more
//user friendly API

//problem, status and error types
pub use crate::solver::core::{
    FunctionValueHistory, ProblemError, QPInfo, QPProblem, SettingsError, SolverError,
    SolverStatus, StopCriterion,
};

//feasible sets
pub use crate::solver::core::feasibleset;
pub use crate::solver::core::feasibleset::SimplexSet;

//progress events passed to log callbacks
pub use crate::solver::core::callbacks::SolverEvent;

//user facing traits required to define new QP backends
pub use crate::solver::core::traits;
pub use crate::solver::core::traits::{ConstrainedQPSolver, QPSolverBackend};

pub use crate::solver::implementations::alternating::*;
pub use crate::solver::implementations::spgqp::*;
