#![allow(non_snake_case)]
use crate::algebra::*;
use crate::solver::core::{SolverStatus, StopCriterion};
use crate::timers::*;

/// Progress and termination information for an SPGQP solve.

#[derive(Default, Debug, Clone)]
pub struct SpgInfo<T> {
    /// number of completed iterations
    pub iterations: u32,
    /// number of operator applications
    pub hessmult: u32,
    /// objective value at the final iterate
    pub fx: T,
    /// squared norm of the last projected step
    pub dd: T,
    /// curvature along the last projected step
    pub dAd: T,
    /// Barzilai-Borwein step for the next iteration
    pub alpha: T,
    /// last accepted line search step
    pub beta: T,
    pub status: SolverStatus,
    pub stop_criterion: Option<StopCriterion>,
    pub solve_time: f64,
}

impl<T> SpgInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self, timers: &mut Timers) {
        *self = Self::default();
        timers.reset_timer("solve");
    }

    pub(crate) fn finalize(&mut self, timers: &Timers) {
        self.solve_time = timers.total_time().as_secs_f64();
    }

    pub(crate) fn set_solved(&mut self, criterion: StopCriterion) {
        self.status = SolverStatus::Solved;
        self.stop_criterion = Some(criterion);
    }
}
