use rayon::prelude::*;

use crate::core::actions::generate_fractal::generate_fractal::{
    GenerateFractalError, allocate_grid_buffer, fill_row,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::options::Options;

/// Evaluates every cell of `options` on rayon's work-stealing pool.
///
/// The grid buffer is allocated once and split into one mutable slice per
/// row, so every row task writes memory no other task can reach. The call
/// returns only after every row has been filled; the grid is then frozen and
/// handed back whole.
pub fn generate_fractal_parallel_rayon<Alg: FractalAlgorithm>(
    options: Options,
    algorithm: &Alg,
) -> Result<IterationGrid, GenerateFractalError> {
    let mut buffer = allocate_grid_buffer(&options)?;

    buffer
        .par_chunks_mut(options.x_res as usize)
        .enumerate()
        .for_each(|(y, row)| fill_row(algorithm, y as u32, row));

    Ok(IterationGrid::from_data(options, buffer)?)
}
