use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;

pub const DEFAULT_LIMIT: u32 = 512;
pub const DEFAULT_COARSE_FACTORS: [u32; 3] = [256, 64, 4];
pub const DEFAULT_MIN_RESOLUTION: u32 = 1;

/// Construction settings for a refinement pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotConfig {
    pub viewport: Viewport,
    pub limit: u32,
    /// Down-sampling factors run before the final stage, coarsest first.
    pub coarse_factors: Vec<u32>,
    /// Factor of the final stage; the display's device-pixel-ratio hint.
    pub min_resolution: u32,
    pub colour_map_kind: ColourMapKind,
    pub parallel: bool,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            limit: DEFAULT_LIMIT,
            coarse_factors: DEFAULT_COARSE_FACTORS.to_vec(),
            min_resolution: DEFAULT_MIN_RESOLUTION,
            colour_map_kind: ColourMapKind::default(),
            parallel: true,
        }
    }
}
