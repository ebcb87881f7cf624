pub mod colour;
pub mod complex;
pub mod iteration_grid;
pub mod options;
pub mod point;
pub mod raster_image;
pub mod viewport;
