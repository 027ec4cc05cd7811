//! Spectral projected gradient solver for simplex constrained QPs.

mod info;
mod info_print;
mod settings;
mod solver;

pub use info::*;
pub use settings::*;
pub use solver::*;
