mod controllers;
mod core;
mod presenters;

pub use controllers::cli::cli_controller::{CliController, CliError};
pub use controllers::pipeline::{
    FrameData, Pipeline, PipelinePresenterPort, RenderError, RenderEvent, ZoomDirection,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, CancellationToken, NeverCancel};
pub use crate::core::actions::generate_fractal::evaluate_grid;
pub use crate::core::actions::generate_fractal::generate_fractal::GenerateFractalError;
pub use crate::core::actions::generate_raster::generate_raster::generate_raster;
pub use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
pub use crate::core::actions::refine::refinement_scheduler::{
    RefinementError, RefinementHandle, RefinementOutcome, RefinementScheduler, RefinementState,
    RefinementStep,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
pub use crate::core::data::options::{Options, OptionsError};
pub use crate::core::data::point::Point;
pub use crate::core::data::raster_image::{RasterImage, RasterImageError};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::escape_count;
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::gradient::{ColourMapError, GradientColourMap};
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::view::view_state::{ViewState, ViewStateError};
pub use presenters::channel::presenter::ChannelPresenter;
pub use presenters::file::ppm::PpmFilePresenter;
