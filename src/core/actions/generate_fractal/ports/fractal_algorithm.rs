use crate::core::data::point::Point;

/// Per-cell escape-time computation used by the grid evaluators.
///
/// Implementations must be pure: the same cell always yields the same count,
/// whichever thread computes it.
pub trait FractalAlgorithm: Sync {
    fn compute(&self, pixel: Point) -> u32;
}
