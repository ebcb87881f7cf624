pub mod frame_data;
pub mod zoom_direction;
