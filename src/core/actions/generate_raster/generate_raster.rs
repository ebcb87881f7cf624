use rayon::prelude::*;

use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::raster_image::{BYTES_PER_PIXEL, RasterImage, RasterImageError};

/// Gradient position for each escape count in `min..max`, indexed by
/// `count - min`. Positions follow a square-root curve to spread out the
/// low counts that dominate most views.
fn build_palette<CMap: ColourMap + ?Sized>(min: u32, max: u32, colour_map: &CMap) -> Vec<Colour> {
    let span = max - min;

    (0..span)
        .map(|offset| colour_map.sample((f64::from(offset) / f64::from(span)).sqrt()))
        .collect()
}

/// Colours a finished grid.
///
/// Counts are normalised against the grid's own range, so every stage of a
/// refinement uses the full gradient. Cells that reached the iteration limit
/// are painted black whatever the map.
pub fn generate_raster<CMap: ColourMap + ?Sized>(
    grid: &IterationGrid,
    colour_map: &CMap,
) -> Result<RasterImage, RasterImageError> {
    let counts = grid.buffer();
    let limit = grid.limit();
    let min = counts.iter().copied().min().unwrap_or(0);
    let max = counts.iter().copied().max().map_or(1, |max| max.saturating_add(1));
    let palette = build_palette(min, max, colour_map);

    let mut buffer = vec![0u8; counts.len() * BYTES_PER_PIXEL];

    buffer
        .par_chunks_mut(BYTES_PER_PIXEL)
        .zip(counts.par_iter())
        .for_each(|(pixel, &count)| {
            let colour = if count == limit {
                Colour::BLACK
            } else {
                palette
                    .get((count - min) as usize)
                    .copied()
                    .unwrap_or(Colour::BLACK)
            };
            pixel.copy_from_slice(&colour.to_rgba());
        });

    RasterImage::from_data(grid.width(), grid.height(), buffer)
}
