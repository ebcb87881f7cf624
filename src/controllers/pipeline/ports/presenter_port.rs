use crate::controllers::pipeline::events::render_event::RenderEvent;

/// Receives every frame and error the pipeline publishes, on the refinement
/// worker thread or, for recolours, on the control thread.
pub trait PipelinePresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
