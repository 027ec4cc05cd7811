#![allow(non_snake_case)]

#[cfg(test)]
mod callback_test {

    use spgqp::{algebra::*, solver::*};

    // setup a custom termination function
    fn callback_r(info: &SpgInfo<f64>) -> bool {
        if info.iterations < 3 {
            println!("tick");
            false //continue
        } else {
            println!("BOOM!\n");
            true // stop
        }
    }

    fn slow_problem() -> QPProblem<f64> {
        // badly scaled diagonal, so that the solver needs more than a
        // few iterations
        let d: Vec<f64> = (0..20).map(|i| 1.0 + 10.0 * i as f64).collect();
        let A = DiagonalOperator::new(d).unwrap();
        let S = SimplexSet::new(1, 20).unwrap();
        let b: Vec<f64> = (0..20).map(|i| (i % 7) as f64).collect();
        QPProblem::new(Box::new(A), b, vec![0.05; 20], S).unwrap()
    }

    #[test]
    fn test_callbacks() {
        let mut problem = slow_problem();
        let settings = SpgSettingsBuilder::default().eps(1e-14).build().unwrap();
        let mut solver = SpgSolver::new(settings).unwrap();

        solver.set_termination_callback(callback_r);
        let info = solver.solve(&mut problem).unwrap();
        assert_eq!(info.status, SolverStatus::CallbackTerminated);
        assert_eq!(info.iterations, 3);

        // turn it off and run again
        solver.unset_termination_callback();
        let info = solver.solve(&mut problem).unwrap();
        assert_ne!(info.status, SolverStatus::CallbackTerminated);
        assert!(info.iterations >= 3);

        // turn it back on with a closure
        let mut calls = 0;
        solver.set_termination_closure(move |_info: &SpgInfo<f64>| {
            calls += 1;
            calls > 1
        });
        let info = solver.solve(&mut problem).unwrap();
        assert_eq!(info.status, SolverStatus::CallbackTerminated);
        assert_eq!(info.iterations, 2);
    }

    #[test]
    fn test_log_callback_removed() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut problem = slow_problem();
        let mut solver = SpgSolver::new(SpgSettings::default()).unwrap();

        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        solver.set_log_callback(move |_e: &SolverEvent<f64>| counter.set(counter.get() + 1));
        let info = solver.solve(&mut problem).unwrap();

        // one event per step and one at the end
        assert_eq!(count.get(), info.iterations + 1);

        solver.unset_log_callback();
        solver.solve(&mut problem).unwrap();
        assert_eq!(count.get(), info.iterations + 1);
    }
}
