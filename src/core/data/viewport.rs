use crate::core::data::complex::Complex;

pub const DEFAULT_CENTER: Complex = Complex {
    real: -1.141,
    imag: -0.2678,
};
pub const DEFAULT_SCALE: f64 = 0.1;

/// The visible window into the complex plane.
///
/// `scale` is the plane width spanned by `pixel_width`. A viewport is never
/// edited in place: every `with_*` call returns a fresh value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub center: Complex,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pixel_width: 1,
            pixel_height: 1,
            center: DEFAULT_CENTER,
            scale: DEFAULT_SCALE,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn with_size(self, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            pixel_width,
            pixel_height,
            ..self
        }
    }

    #[must_use]
    pub fn with_center(self, center: Complex) -> Self {
        Self { center, ..self }
    }

    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let viewport = Viewport::default();

        assert_eq!(viewport.pixel_width, 1);
        assert_eq!(viewport.pixel_height, 1);
        assert_eq!(viewport.center, DEFAULT_CENTER);
        assert_eq!(viewport.scale, 0.1);
    }

    #[test]
    fn test_with_size_leaves_original_untouched() {
        let original = Viewport::default();
        let resized = original.with_size(800, 600);

        assert_eq!(original.pixel_width, 1);
        assert_eq!(resized.pixel_width, 800);
        assert_eq!(resized.pixel_height, 600);
        assert_eq!(resized.center, original.center);
        assert_eq!(resized.scale, original.scale);
    }

    #[test]
    fn test_with_center_and_scale() {
        let moved = Viewport::default()
            .with_center(Complex {
                real: 0.25,
                imag: -0.5,
            })
            .with_scale(3.0);

        assert_eq!(moved.center.real, 0.25);
        assert_eq!(moved.center.imag, -0.5);
        assert_eq!(moved.scale, 3.0);
    }
}
