//! Refinement pipeline driven by a display collaborator.
//!
//! The collaborator forwards size, pointer, zoom and mode events to
//! [`Pipeline`], which derives fresh [`Options`](crate::Options), supersedes
//! the running refinement and hands every coloured stage back through a
//! [`PipelinePresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::Pipeline;
pub use data::frame_data::FrameData;
pub use data::zoom_direction::ZoomDirection;
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::PipelinePresenterPort;
