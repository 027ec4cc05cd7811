#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::solver::core::{
    callbacks::{Callback, SolverCallbacks, SolverEvent},
    feasibleset::SimplexSet,
    traits::{ConstrainedQPSolver, QPSolverBackend},
    ProblemError, QPProblem, SolverError, SolverStatus, StopCriterion,
};
use crate::solver::implementations::spgqp::SpgSolver;
use crate::timers::*;
use rand::{rngs::StdRng, SeedableRng};
use std::io::Write;

/// Fuzzy clustering of time series data with a smoothing penalty.
///
/// Alternately minimizes
///
/// `½ γ'Aγ + c Σ_{n,k} γ[n,k] (data[n] - θ[k])²`,  `c = 1/(T*R)`
///
/// over the assignment `γ` (a simplex constrained QP, solved by the
/// configured QP backend) and over the cluster parameters `θ` (in
/// closed form), until the objective stops changing.

#[derive(Debug)]
pub struct AlternatingSolver<T: FloatT> {
    pub settings: AlternatingSettings<T>,
    pub result: AlternatingResult<T>,

    data: TimeSeriesData<T>,
    nclusters: usize,
    problem: QPProblem<T>,
    backend: QPSolverBackend<T>,

    // operator coefficient reached after annealing
    penalty: T,
    // operator times assignment, for the penalized theta update
    Agamma: Vec<T>,

    stream: PrintTarget,
    callbacks: SolverCallbacks<AlternatingResult<T>, T>,
    timers: Option<Timers>,
}

impl<T> AlternatingSolver<T>
where
    T: FloatT,
{
    /// `operator` acts on assignment vectors of length
    /// `data.nblocks() * nclusters`.  Its current coefficient is taken
    /// as the penalty strength.
    pub fn new(
        data: TimeSeriesData<T>,
        nclusters: usize,
        operator: Box<dyn MatrixOperator<T>>,
        settings: AlternatingSettings<T>,
    ) -> Result<Self, SolverError> {
        settings.validate()?;
        if !data.values().is_finite() {
            return Err(SolverError::NonFiniteInput("data"));
        }

        let feasible_set = SimplexSet::new(data.nblocks(), nclusters)?;
        let n = feasible_set.dim();
        let penalty = operator.coeff();
        let problem = QPProblem::new(operator, vec![T::zero(); n], vec![T::zero(); n], feasible_set)?;
        let backend = SpgSolver::new(settings.spg.clone())?.into();

        Ok(Self {
            settings,
            result: AlternatingResult::new(),
            data,
            nclusters,
            problem,
            backend,
            penalty,
            Agamma: Vec::new(),
            stream: PrintTarget::default(),
            callbacks: SolverCallbacks::default(),
            timers: Some(Timers::default()),
        })
    }

    pub fn data(&self) -> &TimeSeriesData<T> {
        &self.data
    }

    pub fn nclusters(&self) -> usize {
        self.nclusters
    }

    /// The assignment QP as left by the most recent solve.
    pub fn problem(&self) -> &QPProblem<T> {
        &self.problem
    }

    /// The inner QP solver, e.g. for attaching callbacks.
    pub fn backend_mut(&mut self) -> &mut QPSolverBackend<T> {
        &mut self.backend
    }

    pub fn penalty(&self) -> T {
        self.penalty
    }

    /// Change the penalty strength for subsequent solves.
    pub fn set_penalty(&mut self, coeff: T) {
        self.penalty = coeff;
        self.problem.A.set_coeff(coeff);
    }

    /// Stop after the first outer iteration at which `f` returns true.
    pub fn set_termination_callback(&mut self, f: fn(&AlternatingResult<T>) -> bool) {
        self.callbacks.termination_callback = Callback::Rust(f);
    }

    pub fn unset_termination_callback(&mut self) {
        self.callbacks.termination_callback = Callback::None;
    }

    /// Receive a [`SolverEvent::OuterIteration`] after every outer
    /// iteration, and [`SolverEvent::Finished`] at termination.
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

    pub fn solve(&mut self) -> Result<AlternatingResult<T>, SolverError> {
        self.settings.validate()?;
        self.result = AlternatingResult::new();
        self.initialize()?;

        let mut timers = self.timers.take().unwrap_or_default();
        timers.reset_timer("alternating");

        notimeit! {timers; {
            let _ = self.result.print_configuration(
                &mut self.stream,
                &self.settings,
                &self.data,
                self.nclusters,
                self.penalty,
            );
            let _ = self.result.print_status_header(&mut self.stream, &self.settings);
        }}

        let outcome;
        timeit! {timers => "alternating"; {
            outcome = self.iterate(&mut timers);
        }}

        // leave the operator at full strength
        self.problem.A.set_coeff(self.penalty);

        self.result.solve_time = timers.total_time().as_secs_f64();
        self.timers = Some(timers);
        outcome?;

        self.result.compute_aic();
        let _ = self.result.print_footer(&mut self.stream, &self.settings);

        let result = &self.result;
        self.callbacks.log(|| SolverEvent::Finished {
            status: result.status,
            iterations: result.iterations,
            fx: result.L,
        });

        Ok(self.result.clone())
    }

    // initial assignment goes to the QP start point
    fn initialize(&mut self) -> Result<(), SolverError> {
        let set = self.problem.feasible_set;
        let x0 = &mut self.problem.x0;

        match &self.settings.gamma_init {
            GammaInit::Random => {
                let mut rng = StdRng::seed_from_u64(self.settings.seed);
                set.set_random(x0, &mut rng);
            }
            GammaInit::Uniform => set.set_uniform(x0),
            GammaInit::Given(gamma) => {
                if gamma.len() != set.dim() {
                    return Err(ProblemError::DimensionMismatch {
                        field: "gamma_init",
                        found: gamma.len(),
                        expected: set.dim(),
                    }
                    .into());
                }
                if !gamma.is_finite() {
                    return Err(SolverError::NonFiniteInput("gamma_init"));
                }
                x0.copy_from(gamma);
                set.project(x0);
            }
        }
        self.problem.x.copy_from(&self.problem.x0);

        self.result.theta = match &self.settings.theta_init {
            Some(theta) => {
                if theta.len() != self.nclusters {
                    return Err(ProblemError::DimensionMismatch {
                        field: "theta_init",
                        found: theta.len(),
                        expected: self.nclusters,
                    }
                    .into());
                }
                if !theta.is_finite() {
                    return Err(SolverError::NonFiniteInput("theta_init"));
                }
                theta.clone()
            }
            None => vec![T::zero(); self.nclusters],
        };

        if self.settings.theta_in_penalty {
            self.problem.A.set_cluster_weights(&self.result.theta);
        }
        Ok(())
    }

    fn iterate(&mut self, timers: &mut Timers) -> Result<(), SolverError> {
        let max_iter = self.settings.max_iter;
        let anneal_iter = self.settings.anneal_iter;
        let ramp = self.settings.anneal_penalty && anneal_iter > 0;
        let eps = self.settings.eps;

        let mut L_prev: Option<T> = None;
        self.result.status = SolverStatus::MaxIterations;

        for it in 0..max_iter {
            let annealing = it < anneal_iter;

            let coeff = if annealing && ramp {
                self.penalty * (it + 1).as_T() / anneal_iter.as_T()
            } else {
                self.penalty
            };
            self.problem.A.set_coeff(coeff);

            self.update_linear_term();

            // warm start from the previous assignment
            if it > 0 {
                self.problem.warm_start();
            }

            let solved;
            timeit! {timers => "gamma"; {
                solved = self.backend.solve(&mut self.problem);
            }}
            let info = solved?;
            let L = info.fx;

            timeit! {timers => "theta"; {
                self.update_theta();
            }}

            let result = &mut self.result;
            result.gamma.clone_from(&self.problem.x);
            result.L = L;
            result.L_history.push(L);
            result.iterations = it + 1;
            result.inner_iterations += info.iterations;
            result.hessmult += info.hessmult;
            if info.status == SolverStatus::NumericDegeneracy {
                result.degenerate_solves += 1;
            }

            self.callbacks.log(|| SolverEvent::OuterIteration {
                iter: it + 1,
                L,
                theta: result.theta.clone(),
                inner_iterations: info.iterations,
            });

            notimeit! {timers; {
                let _ = result.print_status(&mut self.stream, &self.settings, info.iterations);
            }}

            let converged = !annealing && L_prev.is_some_and(|prev| T::abs(L - prev) < eps);
            L_prev = Some(L);

            if converged {
                result.status = SolverStatus::Solved;
                result.stop_criterion = Some(StopCriterion::OuterObjectiveChange);
                break;
            }

            if self.callbacks.check_termination(result) {
                result.status = SolverStatus::CallbackTerminated;
                break;
            }
        }
        Ok(())
    }

    // b[n,k] = -c (data[n] - θ[k])²
    fn update_linear_term(&mut self) {
        let K = self.nclusters;
        let c = self.data.scale();
        let theta = &self.result.theta;

        for (bn, &dn) in self.problem.b.chunks_mut(K).zip(self.data.values()) {
            for (bnk, &θk) in bn.iter_mut().zip(theta) {
                let r = dn - θk;
                *bnk = -c * r * r;
            }
        }
    }

    // closed form minimizer over θ for fixed γ.  Zero denominators
    // (empty clusters) give θ[k] = 0.
    fn update_theta(&mut self) {
        let K = self.nclusters;
        let c = self.data.scale();
        let half: T = (0.5).as_T();
        let penalized = self.settings.theta_in_penalty;
        let gamma = &self.problem.x;

        if penalized {
            // γ_k'Aγ_k with unit block weights
            self.problem.A.set_cluster_weights(&vec![T::one(); K]);
            self.Agamma.resize(gamma.len(), T::zero());
            self.problem.A.apply(&mut self.Agamma, gamma);
            self.result.hessmult += 1;
        }

        for k in 0..K {
            let mut gsum = T::zero();
            let mut gx = T::zero();
            let mut gAg = T::zero();
            for (n, &dn) in self.data.values().iter().enumerate() {
                let i = n * K + k;
                gsum += gamma[i];
                gx += gamma[i] * dn;
                if penalized {
                    gAg += gamma[i] * self.Agamma[i];
                }
            }

            self.result.theta[k] = if penalized {
                (c * gx).safe_div(c * gsum + half * gAg, T::zero())
            } else {
                gx.safe_div(gsum, T::zero())
            };
        }

        if penalized {
            self.problem.A.set_cluster_weights(&self.result.theta);
        }
    }
}

impl<T> ConfigurablePrintTarget for AlternatingSolver<T>
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
