use super::SolverStatus;

// ---------------------------------
// enum for managing callbacks
// ---------------------------------

#[derive(Default)]
pub(crate) enum Callback<I> {
    #[default]
    None,
    Rust(fn(&I) -> bool),
    Closure(Box<dyn FnMut(&I) -> bool>),
}

impl<I> Callback<I> {
    // Call the callback function
    fn call(&mut self, info: &I) -> bool {
        match self {
            Callback::None => false,
            Callback::Rust(f) => f(info),
            Callback::Closure(f) => f(info),
        }
    }
}

impl<I> std::fmt::Debug for Callback<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Callback::None => write!(f, "Callback::None"),
            Callback::Rust(_) => write!(f, "Callback::Rust"),
            Callback::Closure(_) => write!(f, "Callback::Closure"),
        }
    }
}

/// Structured diagnostic events emitted to a solver's log callback.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub enum SolverEvent<T> {
    /// An accepted SPGQP step.  `fx_max` is the largest value in the
    /// history window against which `fx` was accepted.
    Iteration {
        iter: u32,
        fx: T,
        fx_max: T,
        dd: T,
        dAd: T,
        alpha: T,
        beta: T,
    },
    /// Non-positive curvature `d'Ad` with a step `d'd` above tolerance.
    Degeneracy { iter: u32, dd: T, dAd: T },
    /// A solve has terminated.
    Finished {
        status: SolverStatus,
        iterations: u32,
        fx: T,
    },
    /// One pass of the alternating outer loop has completed.
    OuterIteration {
        iter: u32,
        L: T,
        theta: Vec<T>,
        inner_iterations: u32,
    },
}

pub(crate) type LogCallback<T> = Box<dyn FnMut(&SolverEvent<T>)>;

pub(crate) struct SolverCallbacks<I, T> {
    /// callback for termination
    pub termination_callback: Callback<I>,
    /// callback receiving structured progress events
    pub log_callback: Option<LogCallback<T>>,
}

impl<I, T> Default for SolverCallbacks<I, T> {
    // Create a new set of callbacks
    fn default() -> Self {
        Self {
            termination_callback: Callback::None,
            log_callback: None,
        }
    }
}

impl<I, T> std::fmt::Debug for SolverCallbacks<I, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverCallbacks")
            .field("termination_callback", &self.termination_callback)
            .field("log_callback", &self.log_callback.is_some())
            .finish()
    }
}

impl<I, T> SolverCallbacks<I, T> {
    pub(crate) fn check_termination(&mut self, info: &I) -> bool {
        self.termination_callback.call(info)
    }

    pub(crate) fn log(&mut self, event: impl FnOnce() -> SolverEvent<T>) {
        if let Some(f) = self.log_callback.as_mut() {
            f(&event());
        }
    }
}
