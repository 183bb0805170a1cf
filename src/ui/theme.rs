//! Terminal theme colors.

use crate::metrics::Color;
use crate::storage::Theme;

/// Colors used when rendering a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Title and header text
    pub header: Color,
    /// Regular cell text
    pub text: Color,
    /// Pace column and info lines
    pub muted: Color,
    /// Messages replacing an empty table
    pub warning: Color,
    /// Text drawn over an effort color
    pub on_effort: Color,
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Primary text
    pub const TEXT_PRIMARY: Color = Color::new(240, 240, 245);
    /// Secondary text
    pub const TEXT_SECONDARY: Color = Color::new(160, 160, 170);
    /// Accent color (blue)
    pub const ACCENT: Color = Color::new(66, 133, 244);
    /// Warning color (yellow/orange)
    pub const WARNING: Color = Color::new(251, 188, 4);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Primary text
    pub const TEXT_PRIMARY: Color = Color::new(32, 32, 40);
    /// Secondary text
    pub const TEXT_SECONDARY: Color = Color::new(96, 96, 104);
    /// Accent color (blue)
    pub const ACCENT: Color = Color::new(26, 115, 232);
    /// Warning color (yellow/orange)
    pub const WARNING: Color = Color::new(234, 160, 0);
}

/// Effort backgrounds range from green to red; dark text reads on both.
const ON_EFFORT: Color = Color::new(0, 0, 0);

/// Palette for a theme.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            header: DarkTheme::ACCENT,
            text: DarkTheme::TEXT_PRIMARY,
            muted: DarkTheme::TEXT_SECONDARY,
            warning: DarkTheme::WARNING,
            on_effort: ON_EFFORT,
        },
        Theme::Light => Palette {
            header: LightTheme::ACCENT,
            text: LightTheme::TEXT_PRIMARY,
            muted: LightTheme::TEXT_SECONDARY,
            warning: LightTheme::WARNING,
            on_effort: ON_EFFORT,
        },
    }
}
