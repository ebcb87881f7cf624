use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster_image::RasterImage;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes rasters as binary (P6) PPM files, creating missing parent
/// directories.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, image: &RasterImage, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        // P6: binary RGB, then width, height and max colour value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", image.width(), image.height())?;
        writeln!(file, "255")?;
        file.write_all(&image.to_rgb())?;
        file.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
