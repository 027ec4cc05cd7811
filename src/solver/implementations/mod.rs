//! Solver implementations.

pub mod alternating;
pub mod spgqp;
