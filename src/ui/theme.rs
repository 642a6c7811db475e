//! Light/dark theme state.
//!
//! The theme is a plain toggle owned by the calculator shell. Dark is the
//! starting mode; presentation happens through a `dark-mode` class on the
//! document root.

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light background
    Light,
    /// Dark background, the initial mode
    #[default]
    Dark,
}

impl ThemeMode {
    /// CSS class applied to the root element while dark
    pub const CLASS: &'static str = "dark-mode";

    /// Returns true for the dark theme
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Returns the other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
