//! Loading indicator variants and frame sets.

use crate::colors::{Hue, Shade};
use crate::key::style_key;
use crate::size::Size;
use ratatui::style::Color;

style_key! {
    /// Animation style of a loading indicator.
    pub enum LoadingVariant("loading") {
        Spinner => "spinner",
        Wave => "wave",
        Dots => "dots",
    }
    default = Spinner;
}

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const WAVE: &[&str] = &["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂"];
const DOTS: &[&str] = &["●", "•", "·", "•"];

/// Colors of the five bouncing dots.
pub const DOT_COLORS: [Color; 5] = [
    Color::Rgb(210, 4, 4),
    Color::Rgb(251, 176, 59),
    Color::Rgb(0, 113, 188),
    Color::Rgb(102, 45, 145),
    Color::Rgb(176, 1, 104),
];

/// Default spinner color.
pub fn spinner_color() -> Color {
    Hue::Blue.shade(Shade::Solid)
}

impl LoadingVariant {
    /// Animation frames, cycled by tick.
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Self::Spinner => SPINNER,
            Self::Wave => WAVE,
            Self::Dots => DOTS,
        }
    }

    /// Number of glyphs drawn side by side for a size.
    pub fn width(self, size: Size) -> usize {
        match (self, size) {
            (Self::Spinner, _) => 1,
            (Self::Wave, Size::Small) => 6,
            (Self::Wave, Size::Medium) => 10,
            (Self::Wave, Size::Large) => 16,
            (Self::Dots, _) => DOT_COLORS.len(),
        }
    }
}
