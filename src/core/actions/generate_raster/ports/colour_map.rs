use crate::core::data::colour::Colour;

/// A read-only colour gradient sampled by normalised position.
pub trait ColourMap: Send + Sync {
    /// Colour at `position`, expected in `[0, 1]`. Out-of-range positions
    /// clamp to the nearest end.
    fn sample(&self, position: f64) -> Colour;

    fn display_name(&self) -> &str;
}
