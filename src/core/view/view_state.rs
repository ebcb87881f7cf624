use crate::core::data::options::Options;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewStateError {
    InvalidSize { width: u32, height: u32 },
    InvalidZoomFactor { factor: f64 },
    ScaleOutOfRange { scale: f64 },
    InvalidPointer { pixel_x: f64, pixel_y: f64 },
    ZeroLimit,
    ZeroMinResolution,
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be positive and finite: {}", factor)
            }
            Self::ScaleOutOfRange { scale } => {
                write!(f, "viewport scale out of range: {}", scale)
            }
            Self::InvalidPointer { pixel_x, pixel_y } => {
                write!(f, "pointer position must be finite: ({}, {})", pixel_x, pixel_y)
            }
            Self::ZeroLimit => write!(f, "iteration limit must be greater than zero"),
            Self::ZeroMinResolution => {
                write!(f, "minimum resolution factor must be greater than zero")
            }
        }
    }
}

impl Error for ViewStateError {}

/// The current view: viewport, iteration limit and the final-stage
/// down-sampling floor. Every mutation swaps in a new [`Viewport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    viewport: Viewport,
    limit: u32,
    coarse_factors: Vec<u32>,
    min_resolution: u32,
}

impl ViewState {
    #[must_use]
    pub fn new(config: &MandelbrotConfig) -> Self {
        Self {
            viewport: config.viewport,
            limit: config.limit,
            coarse_factors: config.coarse_factors.clone(),
            min_resolution: config.min_resolution,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn min_resolution(&self) -> u32 {
        self.min_resolution
    }

    #[must_use]
    pub fn options(&self) -> Options {
        Options::from_viewport(self.viewport, self.limit)
    }

    /// Coarse factors followed by the minimum-resolution floor.
    #[must_use]
    pub fn resolution_factors(&self) -> Vec<u32> {
        let mut factors = self.coarse_factors.clone();
        factors.push(self.min_resolution);
        factors
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> Result<(), ViewStateError> {
        if width == 0 || height == 0 {
            return Err(ViewStateError::InvalidSize { width, height });
        }

        self.viewport = self.viewport.with_size(width, height);

        Ok(())
    }

    /// Re-centres the view on a screen position of the current window.
    pub fn set_center(&mut self, pixel_x: f64, pixel_y: f64) -> Result<(), ViewStateError> {
        let center = self.options().convert_screen_coordinates(pixel_x, pixel_y);

        if !center.real.is_finite() || !center.imag.is_finite() {
            return Err(ViewStateError::InvalidPointer { pixel_x, pixel_y });
        }

        self.viewport = self.viewport.with_center(center);

        Ok(())
    }

    /// Multiplies the plane width by `factor`: below 1 zooms in.
    pub fn zoom(&mut self, factor: f64) -> Result<(), ViewStateError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewStateError::InvalidZoomFactor { factor });
        }

        let scale = self.viewport.scale * factor;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewStateError::ScaleOutOfRange { scale });
        }

        self.viewport = self.viewport.with_scale(scale);

        Ok(())
    }

    pub fn set_limit(&mut self, limit: u32) -> Result<(), ViewStateError> {
        if limit == 0 {
            return Err(ViewStateError::ZeroLimit);
        }

        self.limit = limit;

        Ok(())
    }

    pub fn set_min_resolution(&mut self, min_resolution: u32) -> Result<(), ViewStateError> {
        if min_resolution == 0 {
            return Err(ViewStateError::ZeroMinResolution);
        }

        self.min_resolution = min_resolution;

        Ok(())
    }
}
