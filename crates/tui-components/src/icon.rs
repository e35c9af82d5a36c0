//! Named glyphs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icons available to buttons, alerts and dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Home,
    User,
    Settings,
    Heart,
    Star,
    Search,
    Bell,
    Mail,
    Check,
    Close,
    Plus,
    Minus,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Trash,
    Edit,
    Info,
    Warning,
    Calendar,
}

impl IconName {
    /// Every icon.
    pub const ALL: [IconName; 21] = [
        Self::Home,
        Self::User,
        Self::Settings,
        Self::Heart,
        Self::Star,
        Self::Search,
        Self::Bell,
        Self::Mail,
        Self::Check,
        Self::Close,
        Self::Plus,
        Self::Minus,
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::ArrowUp,
        Self::ArrowDown,
        Self::Trash,
        Self::Edit,
        Self::Info,
        Self::Warning,
        Self::Calendar,
    ];

    /// Glyph for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::User => "☺",
            Self::Settings => "⚙",
            Self::Heart => "♥",
            Self::Star => "★",
            Self::Search => "⌕",
            Self::Bell => "♪",
            Self::Mail => "✉",
            Self::Check => "✓",
            Self::Close => "✕",
            Self::Plus => "+",
            Self::Minus => "−",
            Self::ArrowLeft => "←",
            Self::ArrowRight => "→",
            Self::ArrowUp => "↑",
            Self::ArrowDown => "↓",
            Self::Trash => "🗑",
            Self::Edit => "✎",
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Calendar => "▦",
        }
    }

    /// Kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::User => "user",
            Self::Settings => "settings",
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Search => "search",
            Self::Bell => "bell",
            Self::Mail => "mail",
            Self::Check => "check",
            Self::Close => "close",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::Trash => "trash",
            Self::Edit => "edit",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Calendar => "calendar",
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| format!("unknown icon: {s}"))
    }
}

/// A single styled glyph.
#[derive(Debug, Clone, Copy)]
pub struct Icon {
    name: IconName,
    style: Style,
}

impl Icon {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Icon {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_stringn(
            area.x,
            area.y,
            self.name.glyph(),
            usize::from(area.width),
            self.style,
        );
    }
}
