use crate::core::data::options::Options;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum IterationGridError {
    PointOutsideBounds { point: Point, width: u32, height: u32 },
    BoundsMismatch { grid_size: usize, buffer_size: usize },
}

impl fmt::Display for IterationGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideBounds {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "cell at x:{}, y:{} outside of {}x{} grid",
                    point.x, point.y, width, height
                )
            }
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
        }
    }
}

impl Error for IterationGridError {}

/// Escape counts for every cell of one [`Options`] window, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationGrid {
    options: Options,
    buffer: Vec<u32>,
}

impl IterationGrid {
    pub fn from_data(options: Options, buffer: Vec<u32>) -> Result<Self, IterationGridError> {
        let grid_size = options.pixel_count();

        if grid_size != buffer.len() {
            return Err(IterationGridError::BoundsMismatch {
                grid_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { options, buffer })
    }

    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    #[must_use]
    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.options.x_res
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.options.y_res
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.options.limit
    }

    pub fn get(&self, point: Point) -> Result<u32, IterationGridError> {
        if point.x >= self.width() || point.y >= self.height() {
            return Err(IterationGridError::PointOutsideBounds {
                point,
                width: self.width(),
                height: self.height(),
            });
        }

        Ok(self.buffer[point.y as usize * self.width() as usize + point.x as usize])
    }
}
