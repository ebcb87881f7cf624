pub mod cancellation;
pub mod generate_fractal;
pub mod generate_raster;
pub mod refine;
