//! Terminal styling and color utilities.
//!
//! ANSI escape definitions plus capability detection, so renderers can ask
//! for a [`ColorPalette`] and never branch on the environment themselves.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Bold reverse green for the FEASIBLE badge.
    pub const TAG_OK: &str = "\x1b[1;7;32m";
    /// Bold reverse red for the NOT FEASIBLE badge.
    pub const TAG_FAIL: &str = "\x1b[1;7;31m";

    /// Bright bold white for planet and ship names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (ids, separators).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for the logo border and journey figures.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow for synthesized waypoints.
    pub const YELLOW: &str = "\x1b[33m";
    /// Orange (256-color) for the logo text.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for violation reasons.
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_ok: &'static str,
    pub tag_fail: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub yellow: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_ok: colors::TAG_OK,
            tag_fail: colors::TAG_FAIL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            yellow: colors::YELLOW,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_ok: "",
            tag_fail: "",
            white_bold: "",
            gray: "",
            cyan: "",
            yellow: "",
            orange: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` variable (https://no-color.org/) and the
/// `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal advertises Unicode support via `LANG` or `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LC_ALL", "LANG"].iter().any(|key| {
        std::env::var(key)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    })
}
