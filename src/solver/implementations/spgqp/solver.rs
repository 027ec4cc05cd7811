#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::solver::core::{
    callbacks::{Callback, SolverCallbacks, SolverEvent},
    traits::ConstrainedQPSolver,
    FunctionValueHistory, QPProblem, SolverError, SolverStatus, StopCriterion,
};
use crate::timers::*;
use itertools::izip;
use std::io::Write;

/// Spectral projected gradient solver for simplex constrained QPs.
///
/// Each iteration takes the projected gradient direction
/// `d = P(x - αg) - x` with a Barzilai-Borwein step `α`, and moves
/// along `d` by a step `β` satisfying a non-monotone Armijo condition
/// against the largest of the last `m` objective values.
///
/// Work vectors are allocated on the first solve and reused by later
/// solves of problems with the same dimension.

#[derive(Debug)]
pub struct SpgSolver<T: FloatT> {
    pub settings: SpgSettings<T>,
    pub info: SpgInfo<T>,

    // gradient, step direction, operator times step, scratch
    g: Vec<T>,
    d: Vec<T>,
    Ad: Vec<T>,
    temp: Vec<T>,

    history: FunctionValueHistory<T>,
    stream: PrintTarget,
    callbacks: SolverCallbacks<SpgInfo<T>, T>,
    timers: Option<Timers>,
}

impl<T> SpgSolver<T>
where
    T: FloatT,
{
    pub fn new(settings: SpgSettings<T>) -> Result<Self, SolverError> {
        settings.validate()?;

        Ok(Self {
            history: FunctionValueHistory::new(settings.m),
            settings,
            info: SpgInfo::new(),
            g: Vec::new(),
            d: Vec::new(),
            Ad: Vec::new(),
            temp: Vec::new(),
            stream: PrintTarget::default(),
            callbacks: SolverCallbacks::default(),
            timers: Some(Timers::default()),
        })
    }

    /// Stop the solver once `f` returns true.  Checked after every iteration.
    pub fn set_termination_callback(&mut self, f: fn(&SpgInfo<T>) -> bool) {
        self.callbacks.termination_callback = Callback::Rust(f);
    }

    /// As [`set_termination_callback`](Self::set_termination_callback), for closures.
    pub fn set_termination_closure<F>(&mut self, f: F)
    where
        F: FnMut(&SpgInfo<T>) -> bool + 'static,
    {
        self.callbacks.termination_callback = Callback::Closure(Box::new(f));
    }

    pub fn unset_termination_callback(&mut self) {
        self.callbacks.termination_callback = Callback::None;
    }

    /// Receive a [`SolverEvent`] for every iteration and at termination.
    pub fn set_log_callback<F>(&mut self, f: F)
    where
        F: FnMut(&SolverEvent<T>) + 'static,
    {
        self.callbacks.log_callback = Some(Box::new(f));
    }

    pub fn unset_log_callback(&mut self) {
        self.callbacks.log_callback = None;
    }

    /// Timings of the most recent solve.
    pub fn timers(&self) -> Option<&Timers> {
        self.timers.as_ref()
    }

    /// Objective value `½ x'Ax - b'x` of `problem` at `x`.
    pub fn function_value(&mut self, problem: &QPProblem<T>, x: &[T]) -> T {
        self.temp.resize(x.len(), T::zero());
        objective(&*problem.A, &problem.b, x, &mut self.temp)
    }

    fn allocate(&mut self, n: usize) {
        if self.g.len() != n {
            self.g = vec![T::zero(); n];
            self.d = vec![T::zero(); n];
            self.Ad = vec![T::zero(); n];
            self.temp = vec![T::zero(); n];
        }
        if self.history.capacity() != self.settings.m {
            self.history = FunctionValueHistory::new(self.settings.m);
        }
    }

    fn iterate(&mut self, problem: &mut QPProblem<T>, timers: &mut Timers) {
        let QPProblem {
            A,
            b,
            x0,
            x,
            feasible_set,
        } = problem;
        let A = &**A;
        let settings = &self.settings;
        let info = &mut self.info;

        let γ = settings.gamma;
        let (σ1, σ2) = (settings.sigma1, settings.sigma2);
        let eps = settings.eps;
        let half: T = (0.5).as_T();
        let two: T = (2.0).as_T();

        // starting point
        x.copy_from(x0);
        timeit! {timers => "projection"; {
            feasible_set.project(x);
        }}

        // g = Ax - b
        A.apply(&mut self.g, x);
        self.g.axpby(-T::one(), b, T::one());
        info.hessmult = 1;

        let mut fx = half * (self.g.dot(x) - b.dot(x));
        self.history.fill(fx);
        let mut α = settings.alpha_init;
        let normb = b.norm();

        info.fx = fx;
        info.alpha = α;
        info.status = SolverStatus::MaxIterations;

        while info.iterations < settings.max_iter {
            // d = P(x - αg) - x
            self.d.waxpby(T::one(), x, -α, &self.g);
            timeit! {timers => "projection"; {
                feasible_set.project(&mut self.d);
            }}
            self.d.axpby(-T::one(), x, T::one());

            timeit! {timers => "operator"; {
                A.apply(&mut self.Ad, &self.d);
            }}
            info.hessmult += 1;

            let (dd, dAd, gd) = izip!(&self.d, &self.Ad, &self.g).fold(
                (T::zero(), T::zero(), T::zero()),
                |(dd, dAd, gd), (&d, &Ad, &g)| (dd + d * d, dAd + Ad * d, gd + g * d),
            );
            info.dd = dd;
            info.dAd = dAd;

            if dd < eps {
                info.set_solved(StopCriterion::ProjectedStep);
                break;
            }

            // negative curvature is only possible for an indefinite
            // operator, or from rounding at a near-stationary point
            if dAd < T::zero() {
                info.status = SolverStatus::NumericDegeneracy;
                let iter = info.iterations;
                self.callbacks
                    .log(|| SolverEvent::Degeneracy { iter, dd, dAd });
                break;
            }

            let fx_max = self.history.max();

            // the objective is linear along d when dAd = 0, and the
            // unconstrained step along it is unbounded
            let β = if dAd > T::zero() {
                let ξ = (fx_max - fx) / dAd;
                let β_bar = -gd / dAd;
                let β_hat = γ * β_bar + T::sqrt(T::max(γ * γ * β_bar * β_bar + two * ξ, T::zero()));
                if β_hat.is_nan() {
                    σ1
                } else {
                    β_hat.clamp_to(σ1, σ2)
                }
            } else {
                σ2
            };

            x.axpby(β, &self.d, T::one());
            self.g.axpby(β, &self.Ad, T::one());

            let fx_old = fx;
            fx = match settings.fx_update {
                FxUpdate::Recurrence => fx_old + β * (gd + half * β * dAd),
                FxUpdate::Gradient => half * (self.g.dot(x) - b.dot(x)),
            };

            info.iterations += 1;

            let verify = settings.fx_verify_interval;
            if verify > 0 && info.iterations % verify == 0 {
                fx = objective(A, b, x, &mut self.temp);
                info.hessmult += 1;
            }
            self.history.push(fx);

            α = if dAd > T::zero() {
                (dd / dAd).clamp_to(settings.alpha_min, settings.alpha_max)
            } else {
                settings.alpha_max
            };

            info.fx = fx;
            info.alpha = α;
            info.beta = β;

            let iter = info.iterations;
            self.callbacks.log(|| SolverEvent::Iteration {
                iter,
                fx,
                fx_max,
                dd,
                dAd,
                alpha: α,
                beta: β,
            });

            notimeit! {timers; {
                let _ = info.print_status(&mut self.stream, settings, fx_max);
            }}

            // optional stopping criteria
            let criterion = if settings.stop_difff && T::abs(fx - fx_old) < eps {
                Some(StopCriterion::ObjectiveChange)
            } else if settings.stop_normd_normb && dd < eps * normb {
                Some(StopCriterion::StepNormRelative)
            } else if settings.stop_dAd && dAd < eps {
                Some(StopCriterion::Curvature)
            } else if settings.stop_dAd_normb && dAd < eps * normb {
                Some(StopCriterion::CurvatureRelative)
            } else {
                None
            };
            if let Some(criterion) = criterion {
                info.set_solved(criterion);
                break;
            }

            if self.callbacks.check_termination(info) {
                info.status = SolverStatus::CallbackTerminated;
                break;
            }
        }
    }
}

impl<T> ConstrainedQPSolver<T> for SpgSolver<T>
where
    T: FloatT,
{
    fn solve(&mut self, problem: &mut QPProblem<T>) -> Result<SpgInfo<T>, SolverError> {
        self.settings.validate()?;
        problem.check_dimensions()?;
        if !problem.x0.is_finite() {
            return Err(SolverError::NonFiniteInput("x0"));
        }
        if !problem.b.is_finite() {
            return Err(SolverError::NonFiniteInput("b"));
        }

        self.allocate(problem.dim());

        //timers is stored as an option so that
        //we can swap it out here and avoid
        //borrow conflicts with other fields.
        let mut timers = self.timers.take().unwrap_or_default();
        self.info.reset(&mut timers);

        notimeit! {timers; {
            let _ = self.info.print_configuration(&mut self.stream, &self.settings, problem);
            let _ = self.info.print_status_header(&mut self.stream, &self.settings);
        }}

        timeit! {timers => "solve"; {
            self.iterate(problem, &mut timers);
        }}

        self.info.finalize(&timers);
        self.timers = Some(timers);

        let _ = self.info.print_footer(&mut self.stream, &self.settings);

        let info = &self.info;
        self.callbacks.log(|| SolverEvent::Finished {
            status: info.status,
            iterations: info.iterations,
            fx: info.fx,
        });

        Ok(self.info.clone())
    }

    fn name(&self) -> &'static str {
        "Spectral Projected Gradient method for QP"
    }
}

impl<T> ConfigurablePrintTarget for SpgSolver<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

// ½ x'Ax - b'x, with Ax written to `work`
fn objective<T: FloatT>(A: &dyn MatrixOperator<T>, b: &[T], x: &[T], work: &mut [T]) -> T {
    A.apply(work, x);
    let half: T = (0.5).as_T();
    half * work.dot(x) - b.dot(x)
}
