pub const DARK_CLASS: &str = "dark";
pub const ICON_SUN: &str = "☀";
pub const ICON_MOON: &str = "🌙";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only an exact stored `"dark"` selects dark mode.
    #[must_use]
    pub fn from_preference(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        if self.is_dark() { ICON_SUN } else { ICON_MOON }
    }

    /// Used for both `aria-label` and `title` on the toggle.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        if self.is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    }

    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}
