#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Multiplier applied to the viewport scale.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::In => 0.5,
            Self::Out => 2.0,
        }
    }
}
