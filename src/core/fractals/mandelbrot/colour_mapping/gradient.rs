use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourMapError {
    Empty { name: String },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { name } => {
                write!(f, "colour map '{}' needs at least one colour", name)
            }
        }
    }
}

impl Error for ColourMapError {}

/// Ordered list of discrete colours, sampled by nearest lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientColourMap {
    name: String,
    stops: Vec<Colour>,
}

impl GradientColourMap {
    pub fn new(name: impl Into<String>, stops: Vec<Colour>) -> Result<Self, ColourMapError> {
        let name = name.into();

        if stops.is_empty() {
            return Err(ColourMapError::Empty { name });
        }

        Ok(Self { name, stops })
    }

    #[must_use]
    pub fn stops(&self) -> &[Colour] {
        &self.stops
    }
}

impl ColourMap for GradientColourMap {
    fn sample(&self, position: f64) -> Colour {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        let last = self.stops.len() - 1;
        let index = (position * last as f64).round() as usize;

        self.stops[index.min(last)]
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
