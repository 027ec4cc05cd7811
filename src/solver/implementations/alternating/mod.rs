//! Alternating minimization for penalized fuzzy clustering of time series.
//!
//! The assignment step is a simplex constrained QP handed to a
//! [`QPSolverBackend`](crate::solver::core::traits::QPSolverBackend),
//! and the cluster parameter step is solved in closed form.

mod data;
mod info;
mod info_print;
mod settings;
mod solver;

pub use data::*;
pub use info::*;
pub use settings::*;
pub use solver::*;
