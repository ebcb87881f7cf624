use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OptionsError {
    InvalidResolution { x_res: u32, y_res: u32 },
    ZeroLimit,
    NonFiniteBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    ZeroResolutionFactor,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution { x_res, y_res } => {
                write!(f, "grid resolution must be positive: {}x{}", x_res, y_res)
            }
            Self::ZeroLimit => write!(f, "iteration limit must be greater than zero"),
            Self::NonFiniteBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            } => write!(
                f,
                "plane bounds must be finite: x {}..{}, y {}..{}",
                x_min, x_max, y_min, y_max
            ),
            Self::ZeroResolutionFactor => {
                write!(f, "resolution factor must be greater than zero")
            }
        }
    }
}

impl Error for OptionsError {}

/// Numeric window of one grid evaluation: plane bounds, grid size and
/// iteration limit.
///
/// Derived from a [`Viewport`] and never edited after construction. Call
/// [`Options::validate`] before relying on the invariants; the evaluators do
/// so before allocating anything.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Options {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub x_res: u32,
    pub y_res: u32,
    pub limit: u32,
}

impl Options {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, limit: u32) -> Self {
        let half_width = 0.5 * viewport.scale;
        let half_height =
            0.5 * viewport.scale * f64::from(viewport.pixel_height) / f64::from(viewport.pixel_width);

        Self {
            x_min: viewport.center.real - half_width,
            x_max: viewport.center.real + half_width,
            y_min: viewport.center.imag - half_height,
            y_max: viewport.center.imag + half_height,
            x_res: viewport.pixel_width,
            y_res: viewport.pixel_height,
            limit,
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.x_res == 0 || self.y_res == 0 {
            return Err(OptionsError::InvalidResolution {
                x_res: self.x_res,
                y_res: self.y_res,
            });
        }

        if self.limit == 0 {
            return Err(OptionsError::ZeroLimit);
        }

        let bounds = [self.x_min, self.x_max, self.y_min, self.y_max];
        if bounds.iter().any(|value| !value.is_finite()) {
            return Err(OptionsError::NonFiniteBounds {
                x_min: self.x_min,
                x_max: self.x_max,
                y_min: self.y_min,
                y_max: self.y_max,
            });
        }

        Ok(())
    }

    /// Plane distance between neighbouring columns; 0 for a single column.
    #[must_use]
    pub fn delta_x(&self) -> f64 {
        if self.x_res <= 1 {
            0.0
        } else {
            (self.x_max - self.x_min) / f64::from(self.x_res - 1)
        }
    }

    /// Plane distance between neighbouring rows; 0 for a single row.
    #[must_use]
    pub fn delta_y(&self) -> f64 {
        if self.y_res <= 1 {
            0.0
        } else {
            (self.y_max - self.y_min) / f64::from(self.y_res - 1)
        }
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.x_res as usize * self.y_res as usize
    }

    /// Plane point sampled by grid cell `(x, y)`.
    #[must_use]
    pub fn cell_to_plane(&self, x: u32, y: u32) -> Complex {
        Complex {
            real: self.x_min + f64::from(x) * self.delta_x(),
            imag: self.y_min + f64::from(y) * self.delta_y(),
        }
    }

    /// Maps a screen position (in pixels of this window) back onto the plane.
    #[must_use]
    pub fn convert_screen_coordinates(&self, pixel_x: f64, pixel_y: f64) -> Complex {
        Complex {
            real: self.x_min + (self.x_max - self.x_min) * pixel_x / f64::from(self.x_res),
            imag: self.y_min + (self.y_max - self.y_min) * pixel_y / f64::from(self.y_res),
        }
    }

    /// Same plane window sampled `factor` times more coarsely on each axis.
    pub fn with_resolution(&self, factor: u32) -> Result<Self, OptionsError> {
        if factor == 0 {
            return Err(OptionsError::ZeroResolutionFactor);
        }

        Ok(Self {
            x_res: (self.x_res / factor).max(1),
            y_res: (self.y_res / factor).max(1),
            ..*self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_options() -> Options {
        Options {
            x_min: -2.0,
            x_max: 1.0,
            y_min: -1.5,
            y_max: 1.5,
            x_res: 3,
            y_res: 3,
            limit: 50,
        }
    }

    #[test]
    fn test_deltas() {
        let options = scenario_options();

        assert_eq!(options.delta_x(), 1.5);
        assert_eq!(options.delta_y(), 1.5);
        assert_eq!(options.pixel_count(), 9);
    }

    #[test]
    fn test_single_column_and_row_have_zero_delta() {
        let options = Options {
            x_res: 1,
            y_res: 1,
            ..scenario_options()
        };

        assert_eq!(options.delta_x(), 0.0);
        assert_eq!(options.delta_y(), 0.0);
        assert_eq!(options.cell_to_plane(0, 0), Complex { real: -2.0, imag: -1.5 });
    }

    #[test]
    fn test_cell_to_plane_center() {
        let c = scenario_options().cell_to_plane(1, 1);

        assert_eq!(c.real, -0.5);
        assert_eq!(c.imag, 0.0);
    }

    #[test]
    fn test_validate_accepts_scenario() {
        assert_eq!(scenario_options().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_zero_resolution() {
        let zero_x = Options {
            x_res: 0,
            ..scenario_options()
        };
        let zero_y = Options {
            y_res: 0,
            ..scenario_options()
        };

        assert_eq!(
            zero_x.validate(),
            Err(OptionsError::InvalidResolution { x_res: 0, y_res: 3 })
        );
        assert_eq!(
            zero_y.validate(),
            Err(OptionsError::InvalidResolution { x_res: 3, y_res: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let options = Options {
            limit: 0,
            ..scenario_options()
        };

        assert_eq!(options.validate(), Err(OptionsError::ZeroLimit));
    }

    #[test]
    fn test_validate_rejects_non_finite_bounds() {
        let options = Options {
            x_max: f64::INFINITY,
            ..scenario_options()
        };

        assert!(matches!(
            options.validate(),
            Err(OptionsError::NonFiniteBounds { .. })
        ));
    }

    #[test]
    fn test_from_viewport_keeps_aspect_ratio() {
        let viewport = Viewport {
            pixel_width: 200,
            pixel_height: 100,
            center: Complex {
                real: -0.5,
                imag: 0.0,
            },
            scale: 3.0,
        };

        let options = Options::from_viewport(viewport, 128);

        assert_eq!(options.x_min, -2.0);
        assert_eq!(options.x_max, 1.0);
        assert_eq!(options.y_min, -0.75);
        assert_eq!(options.y_max, 0.75);
        assert_eq!(options.x_res, 200);
        assert_eq!(options.y_res, 100);
        assert_eq!(options.limit, 128);
    }

    #[test]
    fn test_convert_screen_coordinates() {
        let options = Options {
            x_min: -2.0,
            x_max: 2.0,
            y_min: -1.0,
            y_max: 1.0,
            x_res: 400,
            y_res: 200,
            limit: 10,
        };

        let top_left = options.convert_screen_coordinates(0.0, 0.0);
        let middle = options.convert_screen_coordinates(200.0, 100.0);

        assert_eq!(top_left, Complex { real: -2.0, imag: -1.0 });
        assert_eq!(middle, Complex { real: 0.0, imag: 0.0 });
    }

    #[test]
    fn test_with_resolution_floors_and_keeps_minimum_of_one() {
        let options = Options {
            x_res: 1000,
            y_res: 700,
            ..scenario_options()
        };

        let coarse = options.with_resolution(256).unwrap();
        let tiny = options.with_resolution(1024).unwrap();
        let same = options.with_resolution(1).unwrap();

        assert_eq!((coarse.x_res, coarse.y_res), (3, 2));
        assert_eq!((tiny.x_res, tiny.y_res), (1, 1));
        assert_eq!(same, options);
        assert_eq!(coarse.x_min, options.x_min);
        assert_eq!(coarse.limit, options.limit);
    }

    #[test]
    fn test_with_resolution_rejects_zero_factor() {
        assert_eq!(
            scenario_options().with_resolution(0),
            Err(OptionsError::ZeroResolutionFactor)
        );
    }
}
