// package together all of the following and re-export
// in a partially flattened structure :
// : solver status and error types
// : feasible sets and the QP problem container
// : line search history
// : callbacks
// : QP backend traits

pub mod callbacks;
pub mod feasibleset;
pub mod traits;

mod errors;
mod history;
mod problem;
mod settings;
mod status;

pub use errors::*;
pub use history::*;
pub use problem::*;
pub use settings::*;
pub use status::*;

/// Information returned by a constrained QP solve.
///
/// All backends report in the same format as the SPGQP solver.
pub type QPInfo<T> = crate::solver::implementations::spgqp::SpgInfo<T>;
