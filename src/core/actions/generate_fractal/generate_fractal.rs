use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
use crate::core::data::options::{Options, OptionsError};
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateFractalError {
    Options(OptionsError),
    Grid(IterationGridError),
}

impl fmt::Display for GenerateFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(err) => write!(f, "invalid options: {}", err),
            Self::Grid(err) => write!(f, "iteration grid error: {}", err),
        }
    }
}

impl Error for GenerateFractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Options(err) => Some(err),
            Self::Grid(err) => Some(err),
        }
    }
}

impl From<OptionsError> for GenerateFractalError {
    fn from(err: OptionsError) -> Self {
        Self::Options(err)
    }
}

impl From<IterationGridError> for GenerateFractalError {
    fn from(err: IterationGridError) -> Self {
        Self::Grid(err)
    }
}

/// Validates `options` and returns a zeroed buffer sized for the whole grid.
pub(crate) fn allocate_grid_buffer(options: &Options) -> Result<Vec<u32>, OptionsError> {
    options.validate()?;

    Ok(vec![0; options.pixel_count()])
}

/// Writes one row of escape counts into its own slice of the grid buffer.
#[inline]
pub(crate) fn fill_row<Alg: FractalAlgorithm>(algorithm: &Alg, y: u32, row: &mut [u32]) {
    for (x, cell) in (0u32..).zip(row.iter_mut()) {
        *cell = algorithm.compute(Point { x, y });
    }
}

/// Evaluates every cell of `options` row by row on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    options: Options,
    algorithm: &Alg,
) -> Result<IterationGrid, GenerateFractalError> {
    let mut buffer = allocate_grid_buffer(&options)?;

    for (y, row) in (0u32..).zip(buffer.chunks_mut(options.x_res as usize)) {
        fill_row(algorithm, y, row);
    }

    Ok(IterationGrid::from_data(options, buffer)?)
}
