//! Text input variants.
//!
//! Outline and bordered fields draw a heavy frame, underlined fields draw only
//! a rule beneath the text. Focus and error states recolor the frame of
//! whichever variant is in use.

use crate::colors::{Hue, Shade, WHITE};
use crate::descriptor::{BorderType, StyleDescriptor};
use crate::key::style_key;
use ratatui::style::Modifier;

style_key! {
    /// Visual variant of a text input.
    pub enum InputVariant("input") {
        Default => "default",
        Outline => "outline",
        Filled => "filled",
        Bordered => "bordered",
        Underlined => "underlined",
    }
    default = Default;
}

const TEXT: Shade = Shade::Ink;

impl InputVariant {
    /// Resolve this variant to the style of the field itself.
    pub fn descriptor(self) -> StyleDescriptor {
        let frame = Hue::Gray.shade(Shade::Soft);
        match self {
            Self::Default => StyleDescriptor::new()
                .fg(Hue::Gray.shade(TEXT))
                .bg(WHITE)
                .border(frame),
            Self::Outline => StyleDescriptor::new()
                .fg(Hue::Gray.shade(TEXT))
                .border(frame)
                .border_type(BorderType::Thick),
            Self::Filled => StyleDescriptor::new()
                .fg(Hue::Gray.shade(TEXT))
                .bg(Hue::Gray.shade(Shade::Wash))
                .border(frame),
            Self::Bordered => StyleDescriptor::new()
                .fg(Hue::Gray.shade(TEXT))
                .bg(WHITE)
                .border(frame)
                .border_type(BorderType::Thick),
            Self::Underlined => StyleDescriptor {
                border: Some(frame),
                ..StyleDescriptor::new().fg(Hue::Gray.shade(TEXT))
            },
        }
    }

    /// Whether the field is drawn as text over a single rule instead of a box.
    pub fn is_underlined(self) -> bool {
        matches!(self, Self::Underlined)
    }

    /// Field style while it has focus.
    pub fn focused_descriptor(self) -> StyleDescriptor {
        let d = self.descriptor();
        let d = StyleDescriptor {
            border: Some(Hue::Blue.shade(Shade::Base)),
            ..d
        };
        match self {
            Self::Filled => d.bg(WHITE),
            _ => d,
        }
    }

    /// Field style when the value failed validation. Wins over focus.
    pub fn error_descriptor(self) -> StyleDescriptor {
        StyleDescriptor {
            border: Some(Hue::Red.shade(Shade::Base)),
            ..self.descriptor()
        }
    }

    /// Field style when the input is disabled or read-only.
    pub fn disabled_descriptor(self) -> StyleDescriptor {
        let d = self.descriptor();
        let d = match d.bg {
            Some(_) => d.bg(Hue::Gray.shade(Shade::Soft)),
            None => d,
        };
        d.modifiers(Modifier::DIM)
    }

    /// Label line above the field.
    pub fn label_descriptor(error: bool, disabled: bool) -> StyleDescriptor {
        let fg = if disabled {
            Hue::Gray.shade(Shade::Light)
        } else if error {
            Hue::Red.shade(Shade::Solid)
        } else {
            Hue::Gray.shade(Shade::Strong)
        };
        StyleDescriptor::new().fg(fg).modifiers(Modifier::BOLD)
    }

    /// Required-field marker after the label.
    pub fn required_descriptor() -> StyleDescriptor {
        StyleDescriptor::new().fg(Hue::Red.shade(Shade::Base))
    }

    /// Helper text below the field.
    pub fn helper_descriptor() -> StyleDescriptor {
        StyleDescriptor::new().fg(Hue::Gray.shade(Shade::Base))
    }

    /// Error text below the field; replaces the helper text.
    pub fn message_descriptor() -> StyleDescriptor {
        StyleDescriptor::new().fg(Hue::Red.shade(Shade::Solid))
    }

    /// Placeholder and icon glyphs inside the field.
    pub fn muted_descriptor() -> StyleDescriptor {
        StyleDescriptor::new().fg(Hue::Gray.shade(Shade::Light))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleKey;

    #[test]
    fn test_names() {
        assert_eq!(InputVariant::ALL.len(), 5);
        assert_eq!(InputVariant::from_name("underlined"), InputVariant::Underlined);
        assert_eq!(InputVariant::from_name("ghost"), InputVariant::Default);
    }

    #[test]
    fn test_heavy_frames() {
        assert_eq!(InputVariant::Outline.descriptor().border_type, BorderType::Thick);
        assert_eq!(InputVariant::Bordered.descriptor().border_type, BorderType::Thick);
        assert_eq!(InputVariant::Default.descriptor().border_type, BorderType::Plain);
        assert!(InputVariant::Outline.descriptor().bg.is_none());
    }

    #[test]
    fn test_underlined_has_rule_color_but_no_box() {
        let d = InputVariant::Underlined.descriptor();
        assert!(!d.has_border());
        assert!(d.border.is_some());
        assert!(InputVariant::Underlined.is_underlined());
    }

    #[test]
    fn test_state_recolors_frame_only() {
        for variant in InputVariant::ALL {
            let base = variant.descriptor();
            let focused = variant.focused_descriptor();
            let error = variant.error_descriptor();
            assert_ne!(focused.border, base.border, "{variant}");
            assert_ne!(error.border, focused.border, "{variant}");
            assert_eq!(error.border_type, base.border_type, "{variant}");
        }
        assert_eq!(InputVariant::Filled.focused_descriptor().bg, Some(WHITE));
    }

    #[test]
    fn test_disabled_is_dimmed() {
        let d = InputVariant::Filled.disabled_descriptor();
        assert!(d.modifiers.contains(Modifier::DIM));
        assert_eq!(d.bg, Some(Hue::Gray.shade(Shade::Soft)));
        assert!(InputVariant::Outline.disabled_descriptor().bg.is_none());
    }
}
