use crate::core::actions::cancellation::{CancelToken, CancellationToken};
use crate::core::actions::generate_fractal::evaluate_grid;
use crate::core::actions::generate_fractal::generate_fractal::GenerateFractalError;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::options::{Options, OptionsError};
use log::{debug, trace, warn};
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum RefinementError {
    ZeroFactor { stage: usize },
    InvalidOptions { stage: usize, source: OptionsError },
    Evaluation { stage: usize, source: GenerateFractalError },
}

impl fmt::Display for RefinementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFactor { stage } => {
                write!(f, "resolution factor for stage {} must be greater than zero", stage)
            }
            Self::InvalidOptions { stage, source } => {
                write!(f, "stage {} has invalid options: {}", stage, source)
            }
            Self::Evaluation { stage, source } => {
                write!(f, "stage {} failed: {}", stage, source)
            }
        }
    }
}

impl Error for RefinementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroFactor { .. } => None,
            Self::InvalidOptions { source, .. } => Some(source),
            Self::Evaluation { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefinementState {
    #[default]
    Idle,
    Running { stage: usize, stages: usize },
    Completed,
    Canceled,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinementOutcome {
    Completed { stages: usize },
    Canceled { published: usize },
}

/// One published stage of a refinement run.
#[derive(Debug, Clone, PartialEq)]
pub struct RefinementStep {
    /// 1-based stage index.
    pub stage: usize,
    pub stages: usize,
    pub factor: u32,
    pub grid: IterationGrid,
    pub elapsed: Duration,
}

/// Runs a fixed sequence of down-sampled evaluations, coarse to fine.
///
/// Cancellation is observed before each evaluation and before each publish.
/// A stage that is already evaluating runs to completion and is then dropped,
/// so a cancelled run never publishes a grid computed after the cancel.
#[derive(Debug, Clone)]
pub struct RefinementScheduler {
    factors: Vec<u32>,
    state: Arc<Mutex<RefinementState>>,
}

impl RefinementScheduler {
    pub fn new(factors: Vec<u32>) -> Result<Self, RefinementError> {
        if let Some(index) = factors.iter().position(|&factor| factor == 0) {
            return Err(RefinementError::ZeroFactor { stage: index + 1 });
        }

        Ok(Self {
            factors,
            state: Arc::new(Mutex::new(RefinementState::Idle)),
        })
    }

    #[must_use]
    pub fn factors(&self) -> &[u32] {
        &self.factors
    }

    #[must_use]
    pub fn state(&self) -> RefinementState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, state: RefinementState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    pub fn run<C, F>(
        &self,
        base: Options,
        parallel: bool,
        cancel: &C,
        mut on_grid: F,
    ) -> Result<RefinementOutcome, RefinementError>
    where
        C: CancelToken,
        F: FnMut(RefinementStep),
    {
        let stages = self.factors.len();
        let mut published = 0;

        debug!(
            "refinement started: {}x{} limit {} over {} stages (parallel: {})",
            base.x_res, base.y_res, base.limit, stages, parallel
        );

        for (index, &factor) in self.factors.iter().enumerate() {
            let stage = index + 1;

            if cancel.is_cancelled() {
                return Ok(self.cancelled(published));
            }

            self.set_state(RefinementState::Running { stage, stages });

            let options = base
                .with_resolution(factor)
                .map_err(|source| self.failed(RefinementError::InvalidOptions { stage, source }))?;

            let start = Instant::now();
            let grid = evaluate_grid(options, parallel)
                .map_err(|source| self.failed(RefinementError::Evaluation { stage, source }))?;
            let elapsed = start.elapsed();

            if cancel.is_cancelled() {
                trace!("stage {} finished after cancel, dropping grid", stage);
                return Ok(self.cancelled(published));
            }

            debug!(
                "stage {}/{} (factor {}): {}x{} in {:?}",
                stage, stages, factor, options.x_res, options.y_res, elapsed
            );

            on_grid(RefinementStep {
                stage,
                stages,
                factor,
                grid,
                elapsed,
            });
            published += 1;
        }

        self.set_state(RefinementState::Completed);
        debug!("refinement completed after {} stages", stages);

        Ok(RefinementOutcome::Completed { stages })
    }

    /// Runs the refinement on its own thread with a fresh cancellation token.
    ///
    /// Each spawned run tracks its state separately; the returned handle
    /// reports that run only and `self.state()` is left untouched.
    pub fn spawn<F>(&self, base: Options, parallel: bool, on_grid: F) -> RefinementHandle
    where
        F: FnMut(RefinementStep) + Send + 'static,
    {
        let token = CancellationToken::new();
        let state = Arc::new(Mutex::new(RefinementState::Idle));
        let scheduler = Self {
            factors: self.factors.clone(),
            state: Arc::clone(&state),
        };
        let worker_token = token.clone();

        let worker = thread::spawn(move || scheduler.run(base, parallel, &worker_token, on_grid));

        RefinementHandle {
            token,
            state,
            worker,
        }
    }

    fn cancelled(&self, published: usize) -> RefinementOutcome {
        self.set_state(RefinementState::Canceled);
        debug!("refinement cancelled after {} published stages", published);

        RefinementOutcome::Canceled { published }
    }

    fn failed(&self, err: RefinementError) -> RefinementError {
        self.set_state(RefinementState::Failed);
        warn!("refinement failed: {}", err);

        err
    }
}

pub struct RefinementHandle {
    token: CancellationToken,
    state: Arc<Mutex<RefinementState>>,
    worker: JoinHandle<Result<RefinementOutcome, RefinementError>>,
}

impl RefinementHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn state(&self) -> RefinementState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Waits for the run to stop. A panic on the refinement thread is resumed
    /// on the caller.
    pub fn join(self) -> Result<RefinementOutcome, RefinementError> {
        self.worker
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
    }
}
