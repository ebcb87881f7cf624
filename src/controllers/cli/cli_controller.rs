use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::controllers::pipeline::{
    FrameData, Pipeline, PipelinePresenterPort, RenderEvent, ZoomDirection,
};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster_image::RasterImage;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::presenters::channel::presenter::ChannelPresenter;

const FRAME_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    Timeout { generation: u64 },
    Disconnected { generation: u64 },
    NothingToWrite,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout { generation } => {
                write!(f, "timed out waiting for generation {}", generation)
            }
            Self::Disconnected { generation } => {
                write!(f, "pipeline stopped before generation {} finished", generation)
            }
            Self::NothingToWrite => write!(f, "no image has been generated"),
        }
    }
}

impl Error for CliError {}

/// Plays the part of a display collaborator without a window: reports a
/// size, zooms in once and recentres, then keeps the final frame of the last
/// generation.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    image: Option<RasterImage>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            image: None,
        }
    }

    pub fn generate(
        &mut self,
        config: MandelbrotConfig,
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn Error>> {
        let (channel, receiver) = ChannelPresenter::new();
        let mut pipeline = Pipeline::new(config, Arc::new(channel) as Arc<dyn PipelinePresenterPort>);

        println!("Rendering Mandelbrot set...");
        println!("Image size: {}x{}", width, height);
        println!("Max iterations: {}", pipeline.view().limit());

        let start = Instant::now();

        pipeline.on_size_changed(width, height)?;
        pipeline.on_zoom_key(ZoomDirection::In);
        pipeline.on_pointer_release(f64::from(width) * 0.55, f64::from(height) * 0.45)?;

        let frame = Self::wait_for_final_frame(&receiver, pipeline.generation());
        pipeline.shutdown();
        let frame = frame?;

        println!("Duration:   {:?}", start.elapsed());
        info!(
            "generation {} finished: {} stages, last stage {:?}",
            frame.generation, frame.stages, frame.render_duration
        );

        self.image = Some(frame.image);

        Ok(())
    }

    fn wait_for_final_frame(
        receiver: &Receiver<RenderEvent>,
        generation: u64,
    ) -> Result<FrameData, Box<dyn Error>> {
        let deadline = Instant::now() + FRAME_TIMEOUT;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());

            match receiver.recv_timeout(remaining) {
                Ok(RenderEvent::Frame(frame)) => {
                    debug!(
                        "frame: generation {} stage {}/{} factor {}",
                        frame.generation, frame.stage, frame.stages, frame.factor
                    );
                    if frame.generation == generation && frame.is_final() {
                        return Ok(frame);
                    }
                }
                Ok(RenderEvent::Error(error)) => {
                    if error.generation == generation {
                        return Err(Box::new(error));
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    return Err(Box::new(CliError::Timeout { generation }));
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(Box::new(CliError::Disconnected { generation }));
                }
            }
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let image = self.image.as_ref().ok_or(CliError::NothingToWrite)?;

        self.presenter.present(image, filepath.as_ref())?;
        println!("Saved to {}", filepath.as_ref().display());

        Ok(())
    }
}
