use std::path::Path;

use crate::core::data::raster_image::RasterImage;

pub trait FilePresenterPort {
    fn present(&self, image: &RasterImage, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
