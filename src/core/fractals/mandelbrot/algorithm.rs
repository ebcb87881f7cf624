use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::options::{Options, OptionsError};
use crate::core::data::point::Point;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape time of `c = c_real + c_imag·i` under `z ← z² + c`, starting at 0.
///
/// Returns the index of the first step whose result leaves the radius-2 disc,
/// or `limit` if none does. A point landing exactly on the circle counts as
/// escaped.
#[must_use]
pub fn escape_count(c_real: f64, c_imag: f64, limit: u32) -> u32 {
    let c = Complex {
        real: c_real,
        imag: c_imag,
    };
    let mut z = Complex::ZERO;

    for iteration in 0..limit {
        z = z.square() + c;
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    limit
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    options: Options,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn compute(&self, pixel: Point) -> u32 {
        let c = self.options.cell_to_plane(pixel.x, pixel.y);

        escape_count(c.real, c.imag, self.options.limit)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(options: Options) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self { options })
    }

    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for limit in [1, 2, 10, 512, 5000] {
            assert_eq!(escape_count(0.0, 0.0, limit), limit);
        }
    }

    #[test]
    fn test_point_on_radius_two_escapes_immediately() {
        assert_eq!(escape_count(2.0, 0.0, 1), 0);
        assert_eq!(escape_count(2.0, 0.0, 512), 0);
        assert_eq!(escape_count(0.0, -2.0, 512), 0);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        assert_eq!(escape_count(10.0, 10.0, 100), 0);
    }

    #[test]
    fn test_zero_limit_returns_zero() {
        assert_eq!(escape_count(0.0, 0.0, 0), 0);
    }

    #[test]
    fn test_known_escape_time() {
        // c = 1: z = 1, 2, 5 -> |2|² = 4 escapes at step index 1
        assert_eq!(escape_count(1.0, 0.0, 100), 1);
        // c = 0.5: z = 0.5, 0.75, 1.0625, 1.6289, 3.1533 -> escapes at index 4
        assert_eq!(escape_count(0.5, 0.0, 100), 4);
    }

    #[test]
    fn test_cardioid_and_bulb_points_are_interior() {
        assert_eq!(escape_count(-0.5, 0.0, 50), 50);
        assert_eq!(escape_count(-1.0, 0.0, 1000), 1000);
        assert_eq!(escape_count(0.25, 0.0, 200), 200);
    }

    #[test]
    fn test_monotonic_in_limit() {
        let points = [
            (-0.75, 0.1),
            (0.3, 0.5),
            (-1.141, -0.2678),
            (-2.0, 0.0),
            (0.26, 0.0),
            (-0.1, 0.65),
        ];

        for (re, im) in points {
            let mut previous = 0;
            for limit in 0..300 {
                let count = escape_count(re, im, limit);
                assert!(
                    count >= previous,
                    "escape count decreased at c=({}, {}), limit={}",
                    re,
                    im,
                    limit
                );
                assert!(count <= limit);
                previous = count;
            }
        }
    }

    #[test]
    fn test_algorithm_maps_cells_to_plane() {
        let options = Options {
            x_min: -2.0,
            x_max: 1.0,
            y_min: -1.5,
            y_max: 1.5,
            x_res: 3,
            y_res: 3,
            limit: 50,
        };
        let algorithm = MandelbrotAlgorithm::new(options).unwrap();

        assert_eq!(algorithm.compute(Point { x: 1, y: 1 }), 50);
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), 0);
        assert_eq!(algorithm.options(), options);
    }

    #[test]
    fn test_algorithm_samples_the_cell_plane_point() {
        let options = Options {
            x_min: -0.8,
            x_max: -0.7,
            y_min: 0.05,
            y_max: 0.15,
            x_res: 7,
            y_res: 5,
            limit: 200,
        };
        let algorithm = MandelbrotAlgorithm::new(options).unwrap();

        for y in 0..options.y_res {
            for x in 0..options.x_res {
                let c = options.cell_to_plane(x, y);
                assert_eq!(
                    algorithm.compute(Point { x, y }),
                    escape_count(c.real, c.imag, options.limit)
                );
            }
        }
    }

    #[test]
    fn test_algorithm_rejects_invalid_options() {
        let options = Options {
            x_min: -2.0,
            x_max: 1.0,
            y_min: -1.5,
            y_max: 1.5,
            x_res: 0,
            y_res: 3,
            limit: 50,
        };

        assert_eq!(
            MandelbrotAlgorithm::new(options),
            Err(OptionsError::InvalidResolution { x_res: 0, y_res: 3 })
        );
    }
}
