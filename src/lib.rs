//! __spgqp__ is a first-order solver for quadratic programs over products
//! of probability simplices, together with an alternating scheme that uses
//! it to cluster time series data under a smoothing penalty.
//!
//! The QP solver addresses problems of the form
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \frac{1}{2}x^T A x - b^T x\\\\\[2ex\]
//!  \text{subject to} & x \in \Delta_K \times \cdots \times \Delta_K
//!  \end{array}
//! $$
//!
//! where each $\Delta_K = \\{ y \in \mathbb{R}^K : y \ge 0,\ \sum_k y_k = 1 \\}$
//! is a probability simplex and $A$ is a symmetric linear operator that is
//! only ever accessed through products $Ax$.
//!
//! ## Features
//!
//! * __Spectral projected gradients__: Barzilai-Borwein step lengths with a
//!   non-monotone Grippo-Lampariello-Lucidi line search, solved in closed
//!   form for quadratic objectives.
//!
//! * __Matrix-free operators__: any type implementing
//!   [`MatrixOperator`](crate::algebra::MatrixOperator) can be used.  Dense,
//!   diagonal and chain Laplacian operators are provided.
//!
//! * __Parallel projection__: large numbers of simplex blocks are projected
//!   in parallel.
//!
//! * __Alternating clustering__: [`AlternatingSolver`](crate::solver::AlternatingSolver)
//!   alternates QP solves for the cluster assignment with closed form
//!   updates of the cluster parameters.
//!
//! # Example
//!
//! ```
//! use spgqp::algebra::*;
//! use spgqp::solver::*;
//!
//! let A = DiagonalOperator::new(vec![2.0, 2.0]).unwrap();
//! let set = SimplexSet::new(1, 2).unwrap();
//! let mut problem = QPProblem::new(Box::new(A), vec![1.0, 0.0], vec![0.5, 0.5], set).unwrap();
//!
//! let settings = SpgSettingsBuilder::default().eps(1e-12).build().unwrap();
//! let mut solver = SpgSolver::new(settings).unwrap();
//! let info = solver.solve(&mut problem).unwrap();
//!
//! assert!(info.status.is_solved());
//! let x0: f64 = problem.x[0];
//! assert!((x0 - 0.75).abs() < 1e-6);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
pub mod timers;
