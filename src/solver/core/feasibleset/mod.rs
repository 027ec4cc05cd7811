//! Feasible sets for the constrained QP solvers.
//!
//! Only products of probability simplices are currently supported.

mod simplex;
pub use simplex::*;
