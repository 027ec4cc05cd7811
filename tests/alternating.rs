#![allow(non_snake_case)]

use spgqp::{algebra::*, solver::*};
use std::cell::RefCell;
use std::rc::Rc;

// ten observations near 1 followed by ten near 5
fn two_cluster_series() -> Vec<f64> {
    let offsets = [0.03, -0.02, 0.01, -0.04, 0.05, 0.0, -0.01, 0.02, -0.03, -0.01];
    let low = offsets.iter().map(|o| 1.0 + o);
    let high = offsets.iter().rev().map(|o| 5.0 + o);
    low.chain(high).collect()
}

fn mean(v: &[f64]) -> f64 {
    v.iter().sum::<f64>() / v.len() as f64
}

fn alternating_solver(
    penalty: f64,
    settings: AlternatingSettings<f64>,
) -> AlternatingSolver<f64> {
    let data = TimeSeriesData::from_series(two_cluster_series()).unwrap();
    let A = ChainLaplacianOperator::new(data.ntimes(), 1, 2, penalty).unwrap();
    AlternatingSolver::new(data, 2, Box::new(A), settings).unwrap()
}

#[test]
fn test_alternating_two_clusters() {
    let spg = SpgSettingsBuilder::default().eps(1e-10).build().unwrap();
    let settings = AlternatingSettingsBuilder::default()
        .eps(1e-6)
        .seed(1)
        .spg(spg)
        .build()
        .unwrap();
    let mut solver = alternating_solver(0.0, settings);

    let result = solver.solve().unwrap();
    assert_eq!(result.status, SolverStatus::Solved);
    assert_eq!(result.stop_criterion, Some(StopCriterion::OuterObjectiveChange));
    assert!(result.iterations < 100);
    assert_eq!(result.L_history.len() as u32, result.iterations);

    // the objective never increases between outer iterations
    for w in result.L_history.windows(2) {
        assert!(w[1] <= w[0] + 1e-9 * f64::max(1.0, w[0].abs()));
    }

    // both centres recovered
    let data = two_cluster_series();
    let mut theta = result.theta.clone();
    theta.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!((theta[0] - mean(&data[..10])).abs() <= 1e-4);
    assert!((theta[1] - mean(&data[10..])).abs() <= 1e-4);

    // and the grouping
    let labels = result.hard_assignment();
    assert_eq!(labels.len(), 20);
    assert!(labels[..10].iter().all(|&l| l == labels[0]));
    assert!(labels[10..].iter().all(|&l| l == labels[10]));
    assert_ne!(labels[0], labels[10]);

    let S = solver.problem().feasible_set;
    assert!(S.is_feasible(&result.gamma, 1e-9));
    assert!(result.inner_iterations > 0);
    assert!(result.hessmult > result.inner_iterations);
}

#[test]
fn test_alternating_uniform_fixed_point() {
    // identical clusters stay identical
    let settings = AlternatingSettingsBuilder::default()
        .gamma_init(GammaInit::Uniform)
        .build()
        .unwrap();
    let mut solver = alternating_solver(0.0, settings);

    let result = solver.solve().unwrap();
    assert_eq!(result.status, SolverStatus::Solved);
    assert!(result.iterations <= 3);
    assert!((result.theta[0] - result.theta[1]).abs() <= 1e-12);
    assert!((result.theta[0] - mean(&two_cluster_series())).abs() <= 1e-9);
}

#[test]
fn test_alternating_given_initial_values() {
    let settings = AlternatingSettingsBuilder::default()
        .gamma_init(GammaInit::Given(vec![0.5; 40]))
        .theta_init(vec![0.0, 6.0])
        .build()
        .unwrap();
    let mut solver = alternating_solver(0.01, settings);

    let result = solver.solve().unwrap();
    assert!(result.status.is_solved());
    let labels = result.hard_assignment();
    assert!(labels[..10].iter().all(|&l| l == 0));
    assert!(labels[10..].iter().all(|&l| l == 1));
    assert!(result.theta[0] < result.theta[1]);
}

#[test]
fn test_alternating_theta_in_penalty() {
    let settings = AlternatingSettingsBuilder::default()
        .theta_in_penalty(true)
        .theta_init(vec![0.5, 4.0])
        .max_iter(50)
        .build()
        .unwrap();
    let mut solver = alternating_solver(0.01, settings);

    let result = solver.solve().unwrap();
    assert!(result.theta.is_finite());
    assert!(result.gamma.is_finite());

    let labels = result.hard_assignment();
    assert!(labels[..10].iter().all(|&l| l == 0));
    assert!(labels[10..].iter().all(|&l| l == 1));

    // the penalty term in the denominator shrinks theta below
    // the weighted data means
    assert!(result.theta[0] > 0.0 && result.theta[0] < 1.05);
    assert!(result.theta[1] > result.theta[0] && result.theta[1] < 5.05);
}

// every block assigned to cluster 0, so cluster 1 stays empty
fn empty_cluster_solver(theta_in_penalty: bool) -> AlternatingSolver<f64> {
    let data = TimeSeriesData::from_series(vec![1.0; 10]).unwrap();
    let A = ChainLaplacianOperator::new(10, 1, 2, 0.0).unwrap();
    let gamma: Vec<f64> = (0..10).flat_map(|_| [1.0, 0.0]).collect();

    let settings = AlternatingSettingsBuilder::default()
        .gamma_init(GammaInit::Given(gamma))
        .theta_in_penalty(theta_in_penalty)
        .build()
        .unwrap();
    AlternatingSolver::new(data, 2, Box::new(A), settings).unwrap()
}

#[test]
fn test_alternating_empty_cluster() {
    let mut solver = empty_cluster_solver(false);
    let result = solver.solve().unwrap();

    assert_eq!(result.status, SolverStatus::Solved);
    assert_eq!(result.theta, vec![1.0, 0.0]);
    assert!(result.gamma.is_finite());
    assert!(result.L.is_finite());
    assert!(result.hard_assignment().iter().all(|&l| l == 0));
}

#[test]
fn test_alternating_empty_cluster_theta_in_penalty() {
    let mut solver = empty_cluster_solver(true);
    let result = solver.solve().unwrap();

    assert_eq!(result.status, SolverStatus::Solved);
    assert!((result.theta[0] - 1.0).abs() <= 1e-12);
    assert_eq!(result.theta[1], 0.0);
    assert!(result.gamma.is_finite());
    assert!(result.L.is_finite());
}

// Chain operator that records every coefficient it is given
struct RecordingOperator {
    inner: ChainLaplacianOperator<f64>,
    coeffs: Rc<RefCell<Vec<f64>>>,
}

impl MatrixOperator<f64> for RecordingOperator {
    fn dim(&self) -> usize {
        self.inner.dim()
    }
    fn apply(&self, y: &mut [f64], x: &[f64]) {
        self.inner.apply(y, x)
    }
    fn coeff(&self) -> f64 {
        self.inner.coeff()
    }
    fn set_coeff(&mut self, coeff: f64) {
        self.coeffs.borrow_mut().push(coeff);
        self.inner.set_coeff(coeff)
    }
}

#[test]
fn test_alternating_annealing() {
    let target = 0.02;
    let coeffs = Rc::new(RefCell::new(Vec::new()));
    let A = RecordingOperator {
        inner: ChainLaplacianOperator::new(20, 1, 2, target).unwrap(),
        coeffs: coeffs.clone(),
    };
    let data = TimeSeriesData::from_series(two_cluster_series()).unwrap();

    let settings = AlternatingSettingsBuilder::default()
        .anneal_iter(5)
        .anneal_penalty(true)
        .theta_init(vec![0.0, 6.0])
        .build()
        .unwrap();
    let mut solver = AlternatingSolver::new(data, 2, Box::new(A), settings).unwrap();

    let result = solver.solve().unwrap();
    assert!(result.status.is_solved());
    // no convergence test while annealing
    assert!(result.iterations > 5);

    let coeffs = coeffs.borrow();
    for (i, c) in coeffs.iter().take(5).enumerate() {
        assert!((c - target * (i + 1) as f64 / 5.0).abs() <= 1e-15);
    }
    assert!(coeffs[5..].iter().all(|&c| c == target));
    assert_eq!(coeffs.len() as u32, result.iterations + 1);
    assert_eq!(solver.problem().A.coeff(), target);
}

#[test]
fn test_alternating_aic() {
    let settings = AlternatingSettingsBuilder::default()
        .theta_init(vec![0.0, 6.0])
        .build()
        .unwrap();
    let mut solver = alternating_solver(0.0, settings);
    let result = solver.solve().unwrap();

    assert!(result.L > 0.0);
    assert!((result.aic - (2.0 * result.L.ln() + 2.0)).abs() <= 1e-12);
}

#[test]
fn test_alternating_callbacks() {
    fn stop_early(result: &AlternatingResult<f64>) -> bool {
        result.iterations >= 2
    }

    let mut solver = alternating_solver(0.01, AlternatingSettings::default());
    solver.set_termination_callback(stop_early);

    let outer = Rc::new(RefCell::new(Vec::new()));
    let sink = outer.clone();
    solver.set_log_callback(move |e: &SolverEvent<f64>| {
        if let SolverEvent::OuterIteration { iter, L, .. } = e {
            sink.borrow_mut().push((*iter, *L));
        }
    });

    let result = solver.solve().unwrap();
    assert_eq!(result.status, SolverStatus::CallbackTerminated);
    assert_eq!(result.iterations, 2);
    assert_eq!(*outer.borrow(), vec![(1, result.L_history[0]), (2, result.L_history[1])]);

    // run to the iteration limit with the convergence test held off
    solver.unset_termination_callback();
    solver.settings.max_iter = 4;
    solver.settings.anneal_iter = 4;
    let result = solver.solve().unwrap();
    assert_eq!(result.status, SolverStatus::MaxIterations);
    assert_eq!(result.iterations, 4);
}

#[test]
fn test_alternating_input_errors() {
    let data = TimeSeriesData::from_series(vec![1.0, 2.0, 3.0]).unwrap();
    let A = ChainLaplacianOperator::new(3, 1, 1, 0.0).unwrap();
    let err = AlternatingSolver::new(data, 0, Box::new(A), AlternatingSettings::default());
    assert_eq!(err.unwrap_err(), SolverError::Problem(ProblemError::EmptyClusters));

    let data = TimeSeriesData::from_series(vec![1.0, f64::NAN, 3.0]).unwrap();
    let A = ChainLaplacianOperator::new(3, 1, 2, 0.0).unwrap();
    let err = AlternatingSolver::new(data, 2, Box::new(A), AlternatingSettings::default());
    assert_eq!(err.unwrap_err(), SolverError::NonFiniteInput("data"));

    // operator of the wrong size
    let data = TimeSeriesData::from_series(vec![1.0, 2.0, 3.0]).unwrap();
    let A = ChainLaplacianOperator::new(3, 1, 3, 0.0).unwrap();
    let err = AlternatingSolver::new(data, 2, Box::new(A), AlternatingSettings::default());
    assert!(matches!(
        err.unwrap_err(),
        SolverError::Problem(ProblemError::DimensionMismatch { field: "A", .. })
    ));

    assert_eq!(
        TimeSeriesData::new(vec![1.0; 5], 2, 3).unwrap_err(),
        ProblemError::DimensionMismatch {
            field: "data",
            found: 5,
            expected: 6
        }
    );
    assert_eq!(
        TimeSeriesData::<f64>::new(vec![], 0, 3).unwrap_err(),
        ProblemError::EmptyBlocks
    );

    // initial values are checked when solving
    let settings = AlternatingSettingsBuilder::default()
        .gamma_init(GammaInit::Given(vec![0.5; 7]))
        .build()
        .unwrap();
    let mut solver = alternating_solver(0.0, settings);
    assert_eq!(
        solver.solve().unwrap_err(),
        SolverError::Problem(ProblemError::DimensionMismatch {
            field: "gamma_init",
            found: 7,
            expected: 40
        })
    );

    solver.settings.gamma_init = GammaInit::Uniform;
    solver.settings.theta_init = Some(vec![f64::INFINITY, 0.0]);
    assert_eq!(
        solver.solve().unwrap_err(),
        SolverError::NonFiniteInput("theta_init")
    );
}

#[test]
fn test_alternating_multiple_regions() {
    // two regions observed at the same times, with opposite regimes
    let T = 8;
    let R = 2;
    let values: Vec<f64> = (0..T)
        .flat_map(|t| if t < 4 { [1.0, 5.0] } else { [5.0, 1.0] })
        .collect();
    let data = TimeSeriesData::new(values, T, R).unwrap();
    let A = ChainLaplacianOperator::new(T, R, 2, 0.01).unwrap();

    let settings = AlternatingSettingsBuilder::default()
        .theta_init(vec![0.0, 6.0])
        .build()
        .unwrap();
    let mut solver = AlternatingSolver::new(data, 2, Box::new(A), settings).unwrap();
    let result = solver.solve().unwrap();

    assert!(result.status.is_solved());
    assert!((result.theta[0] - 1.0).abs() <= 1e-4);
    assert!((result.theta[1] - 5.0).abs() <= 1e-4);

    let labels = result.hard_assignment();
    for t in 0..T {
        let expected = if t < 4 { [0, 1] } else { [1, 0] };
        assert_eq!(labels[t * R..(t + 1) * R], expected);
    }
}
