//! Algebra module for the first-order solvers.
//!
//! __NB__: Users of the crate will typically only need the
//! [`FloatT`](crate::algebra::FloatT) trait, the
//! [`MatrixOperator`](crate::algebra::MatrixOperator) trait and one of
//! the operators shipped here.
//!
//! All vector math is implemented through the [`VectorMath`] trait on
//! native `[T]` slices.

// first import and flatten the solver's collection
// of core numeric types and matrix / vector traits.

mod error_types;
mod floats;
mod math_traits;
mod operators;
mod vecmath;

pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use operators::*;

#[cfg(test)]
mod tests;
