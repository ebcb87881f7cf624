use crate::controllers::pipeline::data::frame_data::FrameData;
use crate::controllers::pipeline::data::zoom_direction::ZoomDirection;
use crate::controllers::pipeline::errors::render_error::RenderError;
use crate::controllers::pipeline::events::render_event::RenderEvent;
use crate::controllers::pipeline::ports::presenter_port::PipelinePresenterPort;
use crate::core::actions::cancellation::{CancelToken, CancellationToken};
use crate::core::actions::generate_raster::generate_raster::generate_raster;
use crate::core::actions::refine::refinement_scheduler::{
    RefinementOutcome, RefinementScheduler, RefinementStep,
};
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::options::Options;
use crate::core::fractals::mandelbrot::colour_mapping::factory::colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::gradient::GradientColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::view::view_state::{ViewState, ViewStateError};
use log::{debug, trace, warn};
use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

struct RunRequest {
    generation: u64,
    options: Options,
    parallel: bool,
    factors: Vec<u32>,
    token: CancellationToken,
}

/// Work posted to the worker. A new run replaces any run not yet started;
/// recolour requests collapse into one flag.
#[derive(Default)]
struct PendingWork {
    run: Option<RunRequest>,
    recolour: bool,
}

enum WorkerJob {
    Run(RunRequest),
    Recolour,
}

/// The current colour map, versioned so the worker can tell whether the
/// latest grid was already presented with it.
struct ColourMapSlot {
    version: u64,
    map: Arc<GradientColourMap>,
}

/// The most recently published grid, kept so a colour-map change can
/// recolour it without recomputing.
struct PublishedGrid {
    generation: u64,
    stage: usize,
    stages: usize,
    factor: u32,
    grid: Arc<IterationGrid>,
    render_duration: Duration,
    colour_version: u64,
}

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    pending: Mutex<PendingWork>,
    wake: Condvar,
    shutdown: AtomicBool,
    // Worker only. Lock order: `last_grid` before `colour_map`.
    last_grid: Mutex<Option<PublishedGrid>>,
    colour_map: Mutex<ColourMapSlot>,
    presenter_port: Arc<dyn PipelinePresenterPort>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

struct ActiveRun {
    options: Options,
    parallel: bool,
    token: CancellationToken,
}

/// Owns the view and the single refinement worker.
///
/// Event methods run on the caller's thread and only record the new view and
/// post work; evaluation, colouring and presenting all happen on the worker.
/// Each trigger that changes the derived options or the parallel flag cancels
/// the previous run and starts a new generation. Grids of one generation are
/// published coarse to fine; nothing from a cancelled generation is published
/// after its cancel is observed.
pub struct Pipeline {
    shared: Arc<SharedState>,
    view: ViewState,
    parallel: bool,
    colour_map_kind: ColourMapKind,
    active: Option<ActiveRun>,
    worker: Option<JoinHandle<()>>,
}

impl Pipeline {
    /// Starts the worker and the first refinement for `config`.
    pub fn new(config: MandelbrotConfig, presenter_port: Arc<dyn PipelinePresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            pending: Mutex::new(PendingWork::default()),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            last_grid: Mutex::new(None),
            colour_map: Mutex::new(ColourMapSlot {
                version: 0,
                map: Arc::new(colour_map_factory(config.colour_map_kind)),
            }),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        let mut pipeline = Self {
            shared,
            view: ViewState::new(&config),
            parallel: config.parallel,
            colour_map_kind: config.colour_map_kind,
            active: None,
            worker: Some(worker),
        };

        pipeline.trigger();
        pipeline
    }

    /// Returns the new generation if the resize changed the options.
    pub fn on_size_changed(&mut self, width: u32, height: u32) -> Result<Option<u64>, ViewStateError> {
        self.view.set_size(width, height)?;

        Ok(self.trigger())
    }

    pub fn on_pointer_release(
        &mut self,
        pixel_x: f64,
        pixel_y: f64,
    ) -> Result<Option<u64>, ViewStateError> {
        self.view.set_center(pixel_x, pixel_y)?;

        Ok(self.trigger())
    }

    pub fn on_zoom_key(&mut self, direction: ZoomDirection) -> Option<u64> {
        match self.view.zoom(direction.factor()) {
            Ok(()) => self.trigger(),
            Err(err) => {
                warn!("zoom ignored: {}", err);
                None
            }
        }
    }

    pub fn on_mode_toggle(&mut self, parallel: bool) -> Option<u64> {
        self.parallel = parallel;

        self.trigger()
    }

    pub fn set_limit(&mut self, limit: u32) -> Result<Option<u64>, ViewStateError> {
        self.view.set_limit(limit)?;

        Ok(self.trigger())
    }

    /// Sets the final-stage factor. Takes effect on the next triggered run.
    pub fn set_min_resolution(&mut self, min_resolution: u32) -> Result<(), ViewStateError> {
        self.view.set_min_resolution(min_resolution)
    }

    /// Swaps the colour map and asks the worker to republish the latest grid
    /// recoloured, under its original generation. No evaluation is started.
    pub fn set_colour_map(&mut self, kind: ColourMapKind) {
        self.colour_map_kind = kind;

        {
            let mut slot = lock(&self.shared.colour_map);
            slot.version += 1;
            slot.map = Arc::new(colour_map_factory(kind));
        }

        lock(&self.shared.pending).recolour = true;
        self.shared.wake.notify_one();
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> ColourMapKind {
        self.colour_map_kind
    }

    pub fn shutdown(&mut self) {
        {
            let _pending = lock(&self.shared.pending);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        if let Some(active) = &self.active {
            active.token.cancel();
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take()
            && let Err(payload) = handle.join()
        {
            warn!("pipeline worker panicked: {}", panic_message(payload.as_ref()));
        }
    }

    fn trigger(&mut self) -> Option<u64> {
        let options = self.view.options();

        if let Some(active) = &self.active
            && active.options == options
            && active.parallel == self.parallel
        {
            trace!("view unchanged, keeping generation {}", self.generation());
            return None;
        }

        if let Some(previous) = self.active.take() {
            previous.token.cancel();
        }

        let token = CancellationToken::new();
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        debug!(
            "generation {}: {}x{} x[{}, {}] y[{}, {}] limit {}",
            generation,
            options.x_res,
            options.y_res,
            options.x_min,
            options.x_max,
            options.y_min,
            options.y_max,
            options.limit
        );

        lock(&self.shared.pending).run = Some(RunRequest {
            generation,
            options,
            parallel: self.parallel,
            factors: self.view.resolution_factors(),
            token: token.clone(),
        });

        self.shared.wake.notify_one();

        self.active = Some(ActiveRun {
            options,
            parallel: self.parallel,
            token,
        });

        Some(generation)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let job = {
                let mut guard = lock(&shared.pending);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    // Runs first: their stages already use the newest colour map.
                    if let Some(request) = guard.run.take() {
                        break WorkerJob::Run(request);
                    }

                    if guard.recolour {
                        guard.recolour = false;
                        break WorkerJob::Recolour;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            match job {
                WorkerJob::Run(request) => Self::run_request(shared, &request),
                WorkerJob::Recolour => Self::recolour_last_grid(shared),
            }
        }
    }

    fn run_request(shared: &SharedState, request: &RunRequest) {
        let generation = request.generation;
        let cancel_token =
            || shared.shutdown.load(Ordering::Relaxed) || request.token.is_cancelled();

        let result = RefinementScheduler::new(request.factors.clone()).and_then(|scheduler| {
            scheduler.run(request.options, request.parallel, &cancel_token, |step| {
                Self::publish_step(shared, generation, &cancel_token, step);
            })
        });

        match result {
            Ok(RefinementOutcome::Completed { stages }) => {
                debug!("generation {} completed in {} stages", generation, stages);
                shared
                    .last_completed_generation
                    .store(generation, Ordering::Release);
            }
            Ok(RefinementOutcome::Canceled { published }) => {
                debug!(
                    "generation {} superseded after {} stages",
                    generation, published
                );
            }
            Err(err) => {
                if cancel_token.is_cancelled() {
                    return;
                }

                warn!("generation {} failed: {}", generation, err);
                shared.presenter_port.present(RenderEvent::Error(RenderError {
                    generation,
                    message: err.to_string(),
                }));
                shared
                    .last_completed_generation
                    .store(generation, Ordering::Release);
            }
        }
    }

    fn publish_step<C: CancelToken>(
        shared: &SharedState,
        generation: u64,
        cancel: &C,
        step: RefinementStep,
    ) {
        let mut last_grid = lock(&shared.last_grid);

        if cancel.is_cancelled() {
            return;
        }

        let mut published = PublishedGrid {
            generation,
            stage: step.stage,
            stages: step.stages,
            factor: step.factor,
            grid: Arc::new(step.grid),
            render_duration: step.elapsed,
            colour_version: 0,
        };

        published.colour_version = Self::present_grid(shared, &published);
        *last_grid = Some(published);
    }

    fn recolour_last_grid(shared: &SharedState) {
        let mut last_grid = lock(&shared.last_grid);
        let current_version = lock(&shared.colour_map).version;

        let Some(published) = last_grid.as_mut() else {
            return;
        };

        if published.colour_version == current_version {
            trace!("generation {} already uses the current colour map", published.generation);
            return;
        }

        debug!(
            "recolouring generation {} stage {}",
            published.generation, published.stage
        );
        let version = Self::present_grid(shared, published);
        published.colour_version = version;
    }

    /// Materializes `published` with the current colour map and presents it.
    /// Returns the colour map version used.
    fn present_grid(shared: &SharedState, published: &PublishedGrid) -> u64 {
        let (version, colour_map) = {
            let slot = lock(&shared.colour_map);
            (slot.version, Arc::clone(&slot.map))
        };

        let event = match generate_raster(published.grid.as_ref(), colour_map.as_ref()) {
            Ok(image) => RenderEvent::Frame(FrameData {
                generation: published.generation,
                stage: published.stage,
                stages: published.stages,
                factor: published.factor,
                grid: Arc::clone(&published.grid),
                image,
                render_duration: published.render_duration,
            }),
            Err(err) => RenderEvent::Error(RenderError {
                generation: published.generation,
                message: err.to_string(),
            }),
        };

        shared.presenter_port.present(event);

        version
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        self.shutdown();
    }
}
