//! Style descriptors: the values every registry lookup resolves to.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;
use ratatui::widgets::{Block, BorderType as RatatuiBorderType, Borders, Padding};

/// Border type options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    /// Simple single lines
    #[default]
    Plain,
    /// Rounded corners
    Rounded,
    /// Double lines
    Double,
    /// Thick lines
    Thick,
    /// Dashed lines
    Dashed,
    /// No border
    None,
}

impl BorderType {
    /// Ratatui border type, or `None` when no border is drawn.
    pub fn to_ratatui(self) -> Option<RatatuiBorderType> {
        match self {
            Self::Plain => Some(RatatuiBorderType::Plain),
            Self::Rounded => Some(RatatuiBorderType::Rounded),
            Self::Double => Some(RatatuiBorderType::Double),
            Self::Thick => Some(RatatuiBorderType::Thick),
            Self::Dashed => Some(RatatuiBorderType::Plain),
            Self::None => None,
        }
    }
}

const DASHED: border::Set = border::Set {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    vertical_left: "╎",
    vertical_right: "╎",
    horizontal_top: "╌",
    horizontal_bottom: "╌",
};

/// Immutable bundle of visual attributes for one widget variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// Border color
    pub border: Option<Color>,
    /// Border type
    pub border_type: BorderType,
    /// Text modifiers
    pub modifiers: Modifier,
    /// Inner padding
    pub padding: Padding,
}

impl StyleDescriptor {
    /// An empty descriptor: inherit everything, no border.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            border: None,
            border_type: BorderType::None,
            modifiers: Modifier::empty(),
            padding: Padding::ZERO,
        }
    }

    /// Set the foreground color.
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set a plain border in the given color.
    pub const fn border(mut self, color: Color) -> Self {
        self.border = Some(color);
        if matches!(self.border_type, BorderType::None) {
            self.border_type = BorderType::Plain;
        }
        self
    }

    /// Set the border type.
    pub const fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Add text modifiers.
    pub fn modifiers(mut self, modifiers: Modifier) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Set the inner padding.
    pub const fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Whether a border is drawn.
    pub fn has_border(&self) -> bool {
        self.border_type != BorderType::None
    }

    /// Convert to a Ratatui style for content.
    pub fn to_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style.add_modifier(self.modifiers)
    }

    /// Style for border cells.
    pub fn border_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(color) = self.border.or(self.fg) {
            style = style.fg(color);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style
    }

    /// Build a block carrying this descriptor's border, background and padding.
    pub fn block<'a>(&self) -> Block<'a> {
        let mut block = Block::default()
            .style(self.to_style())
            .padding(self.padding);
        if let Some(border_type) = self.border_type.to_ratatui() {
            block = block
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(self.border_style());
            if self.border_type == BorderType::Dashed {
                block = block.border_set(DASHED);
            }
        }
        block
    }

    /// Overlay another descriptor: any attribute it sets wins.
    pub fn patch(mut self, other: StyleDescriptor) -> Self {
        self.fg = other.fg.or(self.fg);
        self.bg = other.bg.or(self.bg);
        self.border = other.border.or(self.border);
        if other.border_type != BorderType::None {
            self.border_type = other.border_type;
        }
        self.modifiers |= other.modifiers;
        if other.padding != Padding::ZERO {
            self.padding = other.padding;
        }
        self
    }
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_sets_plain_type() {
        let d = StyleDescriptor::new().border(Color::Red);
        assert_eq!(d.border_type, BorderType::Plain);
        assert!(d.has_border());

        let d = StyleDescriptor::new()
            .border_type(BorderType::Double)
            .border(Color::Red);
        assert_eq!(d.border_type, BorderType::Double);
    }

    #[test]
    fn test_to_style() {
        let style = StyleDescriptor::new()
            .fg(Color::White)
            .bg(Color::Blue)
            .modifiers(Modifier::BOLD)
            .to_style();
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(Color::Blue));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_border_style_falls_back_to_fg() {
        let d = StyleDescriptor::new().fg(Color::Green);
        assert_eq!(d.border_style().fg, Some(Color::Green));
    }

    #[test]
    fn test_patch() {
        let base = StyleDescriptor::new().fg(Color::White).bg(Color::Black);
        let patched = base.patch(StyleDescriptor::new().bg(Color::Red).modifiers(Modifier::DIM));
        assert_eq!(patched.fg, Some(Color::White));
        assert_eq!(patched.bg, Some(Color::Red));
        assert!(patched.modifiers.contains(Modifier::DIM));
    }
}
