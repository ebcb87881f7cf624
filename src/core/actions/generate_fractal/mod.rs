pub mod generate_fractal;
pub mod generate_fractal_parallel_rayon;
pub mod ports;

use crate::core::actions::generate_fractal::generate_fractal::{
    GenerateFractalError, generate_fractal,
};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::options::Options;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Computes the Mandelbrot escape counts for `options`, either on the calling
/// thread or across the rayon pool. Both paths yield identical grids.
pub fn evaluate_grid(options: Options, parallel: bool) -> Result<IterationGrid, GenerateFractalError> {
    let algorithm = MandelbrotAlgorithm::new(options)?;

    if parallel {
        generate_fractal_parallel_rayon(options, &algorithm)
    } else {
        generate_fractal(options, &algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::options::OptionsError;
    use crate::core::data::point::Point;

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
    fn test_small_grid_scenario() {
        let grid = evaluate_grid(scenario_options(), false).unwrap();

        assert_eq!(grid.buffer().len(), 9);
        assert_eq!(grid.get(Point { x: 1, y: 1 }), Ok(50));
        assert_eq!(grid.get(Point { x: 0, y: 0 }), Ok(0));
        assert!(grid.buffer().iter().all(|&count| count <= 50));
    }

    #[test]
    fn test_serial_and_parallel_are_identical() {
        let options = Options {
            x_min: -2.2,
            x_max: 0.8,
            y_min: -1.2,
            y_max: 1.2,
            x_res: 173,
            y_res: 97,
            limit: 200,
        };

        let serial = evaluate_grid(options, false).unwrap();
        let parallel = evaluate_grid(options, true).unwrap();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_rejects_zero_limit() {
        let options = Options {
            limit: 0,
            ..scenario_options()
        };

        assert_eq!(
            evaluate_grid(options, true),
            Err(GenerateFractalError::Options(OptionsError::ZeroLimit))
        );
    }

    #[test]
    fn test_rejects_non_finite_bounds() {
        let options = Options {
            x_max: f64::NAN,
            ..scenario_options()
        };

        assert!(matches!(
            evaluate_grid(options, false),
            Err(GenerateFractalError::Options(OptionsError::NonFiniteBounds { .. }))
        ));
    }
}
