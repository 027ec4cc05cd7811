#![allow(non_snake_case)]
use crate::algebra::*;
use crate::solver::core::{SolverStatus, StopCriterion};

/// Result of an alternating solve.  Also passed to the termination
/// callback after every outer iteration.

#[derive(Default, Debug, Clone)]
pub struct AlternatingResult<T> {
    /// cluster parameters
    pub theta: Vec<T>,
    /// cluster assignment, one simplex block per (time, region) pair
    pub gamma: Vec<T>,
    /// objective value of the last assignment solve
    pub L: T,
    /// outer iterations
    pub iterations: u32,
    /// total inner solver iterations
    pub inner_iterations: u32,
    /// total operator applications
    pub hessmult: u32,
    /// objective value after each outer iteration
    pub L_history: Vec<T>,
    /// inner solves that stopped on negative curvature
    pub degenerate_solves: u32,
    pub status: SolverStatus,
    pub stop_criterion: Option<StopCriterion>,
    /// Akaike-style score `2 ln(L) + K`, NaN when `L` is not positive
    pub aic: T,
    pub solve_time: f64,
}

impl<T> AlternatingResult<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the largest assignment in each block.
    pub fn hard_assignment(&self) -> Vec<usize> {
        let K = self.theta.len().max(1);
        self.gamma
            .chunks(K)
            .map(|block| {
                block
                    .iter()
                    .enumerate()
                    .fold((0, T::neg_infinity()), |(kbest, vbest), (k, &v)| {
                        if v > vbest {
                            (k, v)
                        } else {
                            (kbest, vbest)
                        }
                    })
                    .0
            })
            .collect()
    }

    pub(crate) fn compute_aic(&mut self) {
        let K: T = self.theta.len().as_T();
        let two: T = (2.0).as_T();
        self.aic = if self.L > T::zero() {
            two * T::ln(self.L) + K
        } else {
            T::nan()
        };
    }
}
