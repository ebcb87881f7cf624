use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn raster_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum RasterImageError {
    PixelOutsideBounds { pixel: Point, width: u32, height: u32 },
    BoundsMismatch { raster_size: usize, buffer_size: usize },
}

impl fmt::Display for RasterImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} raster",
                    pixel.x, pixel.y, width, height
                )
            }
            Self::BoundsMismatch {
                raster_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "raster size {} does not match buffer size {}",
                    raster_size, buffer_size
                )
            }
        }
    }
}

impl Error for RasterImageError {}

pub type RasterImageData = Vec<u8>;

/// Row-major RGBA8 pixels, alpha always 255.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    buffer: RasterImageData,
}

impl RasterImage {
    pub fn from_data(
        width: u32,
        height: u32,
        buffer: RasterImageData,
    ) -> Result<Self, RasterImageError> {
        let raster_size = raster_buffer_size(width, height);

        if raster_size != buffer.len() {
            return Err(RasterImageError::BoundsMismatch {
                raster_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &RasterImageData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, RasterImageError> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return Err(RasterImageError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        let index = (pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Packed RGB bytes with the alpha channel dropped.
    #[must_use]
    pub fn to_rgb(&self) -> Vec<u8> {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // (0,0) red
            0, 255, 0, 255, // (1,0) green
            0, 0, 255, 255, // (0,1) blue
            255, 255, 0, 255, // (1,1) yellow
        ];

        let image = RasterImage::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.buffer(), &data);
        assert_eq!(image.buffer_size(), 16);
    }

    #[test]
    fn test_from_data_buffer_size_mismatch() {
        let result = RasterImage::from_data(2, 2, vec![0; 12]);

        assert_eq!(
            result.unwrap_err(),
            RasterImageError::BoundsMismatch {
                raster_size: 16,
                buffer_size: 12
            }
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 255, 0, 255, //
        ];
        let image = RasterImage::from_data(2, 2, data).unwrap();

        assert_eq!(image.pixel(Point { x: 1, y: 0 }), Ok(Colour::new(0, 255, 0)));
        assert_eq!(image.pixel(Point { x: 0, y: 1 }), Ok(Colour::new(0, 0, 255)));
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let image = RasterImage::from_data(2, 2, vec![0; 16]).unwrap();

        assert_eq!(
            image.pixel(Point { x: 2, y: 1 }),
            Err(RasterImageError::PixelOutsideBounds {
                pixel: Point { x: 2, y: 1 },
                width: 2,
                height: 2
            })
        );
    }

    #[test]
    fn test_to_rgb_drops_alpha() {
        let image = RasterImage::from_data(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 255]).unwrap();

        assert_eq!(image.to_rgb(), vec![1, 2, 3, 4, 5, 6]);
    }
}
