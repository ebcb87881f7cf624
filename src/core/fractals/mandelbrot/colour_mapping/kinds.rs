#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourMapKind {
    #[default]
    Default,
    Fire,
    BlueWhite,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[Self::Default, Self::Fire, Self::BlueWhite];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Fire => "Fire gradient",
            Self::BlueWhite => "Blue-white gradient",
        }
    }
}

impl std::fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
