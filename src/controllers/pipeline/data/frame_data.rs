use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::raster_image::RasterImage;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    /// 1-based refinement stage that produced `grid`.
    pub stage: usize,
    pub stages: usize,
    pub factor: u32,
    pub grid: Arc<IterationGrid>,
    pub image: RasterImage,
    pub render_duration: Duration,
}

impl FrameData {
    /// Whether this frame is the finest stage of its run.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.stage == self.stages
    }
}
