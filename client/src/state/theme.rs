//! Light/dark display mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Persisted display-mode choice. Absence of a stored value means `Light`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Map the theme checkbox state to a theme.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    /// Parse a stored value. Anything other than `"light"` or `"dark"` is
    /// treated as no preference.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Value written to storage and to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
