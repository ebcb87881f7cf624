use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::gradient::GradientColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;

const BLUE_WHITE_STOPS: usize = 32;

const DEFAULT_STOPS: [Colour; 5] = [
    Colour::new(0, 7, 100),
    Colour::new(32, 107, 203),
    Colour::new(237, 255, 255),
    Colour::new(255, 170, 0),
    Colour::new(0, 2, 0),
];

const FIRE_STOPS: [Colour; 5] = [
    Colour::new(0, 0, 0),
    Colour::new(255, 0, 0),
    Colour::new(255, 165, 0),
    Colour::new(255, 255, 0),
    Colour::new(255, 255, 255),
];

/// Bernstein-style polynomial blend from deep blue through to pale white,
/// sampled at interior points so neither end collapses to black.
fn blue_white_stops() -> Vec<Colour> {
    (0..BLUE_WHITE_STOPS)
        .map(|i| {
            let t = (i + 1) as f64 / (BLUE_WHITE_STOPS + 1) as f64;
            let u = 1.0 - t;

            Colour::new(
                (9.0 * u * t * t * t * 255.0) as u8,
                (15.0 * u * u * t * t * 255.0) as u8,
                (8.5 * u * u * u * t * 255.0) as u8,
            )
        })
        .collect()
}

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind) -> GradientColourMap {
    let stops = match kind {
        ColourMapKind::Default => DEFAULT_STOPS.to_vec(),
        ColourMapKind::Fire => FIRE_STOPS.to_vec(),
        ColourMapKind::BlueWhite => blue_white_stops(),
    };

    match GradientColourMap::new(kind.display_name(), stops) {
        Ok(map) => map,
        Err(_) => unreachable!("built-in gradients are never empty"),
    }
}
