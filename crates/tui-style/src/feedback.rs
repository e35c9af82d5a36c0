//! Alert and toast variants.
//!
//! Both families share the callout look: a tinted wash, deep text and a soft
//! border in the variant hue, plus a default icon glyph.

use crate::colors::{Hue, Shade, WHITE};
use crate::descriptor::StyleDescriptor;
use crate::key::style_key;
use ratatui::style::Modifier;

fn callout(hue: Hue) -> StyleDescriptor {
    StyleDescriptor::new()
        .fg(hue.shade(Shade::Deep))
        .bg(hue.shade(Shade::Wash))
        .border(hue.shade(Shade::Soft))
}

style_key! {
    /// Semantic variant of an alert.
    pub enum AlertVariant("alert") {
        Default => "default",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",
        Outline => "outline",
    }
    default = Default;
}

impl AlertVariant {
    /// Resolve this variant to its style descriptor.
    pub fn descriptor(self) -> StyleDescriptor {
        match self {
            Self::Default | Self::Info => callout(Hue::Blue),
            Self::Success => callout(Hue::Green),
            Self::Warning => callout(Hue::Yellow),
            Self::Error => callout(Hue::Red),
            Self::Outline => StyleDescriptor::new()
                .fg(Hue::Gray.shade(Shade::Strong))
                .border(Hue::Gray.shade(Shade::Soft)),
        }
    }

    /// Glyph shown when the caller supplies no icon.
    pub fn default_icon(self) -> &'static str {
        match self {
            Self::Default | Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
            Self::Outline => "✱",
        }
    }
}

style_key! {
    /// Semantic variant of a toast. Has no effect on the toast lifecycle.
    pub enum ToastVariant("toast") {
        Default => "default",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",
    }
    default = Default;
}

impl ToastVariant {
    /// Resolve this variant to its style descriptor.
    pub fn descriptor(self) -> StyleDescriptor {
        match self {
            Self::Default => StyleDescriptor::new()
                .fg(Hue::Gray.shade(Shade::Ink))
                .bg(WHITE)
                .border(Hue::Gray.shade(Shade::Soft)),
            Self::Success => callout(Hue::Green),
            Self::Warning => callout(Hue::Yellow),
            Self::Error => callout(Hue::Red),
            Self::Info => callout(Hue::Blue),
        }
    }

    /// Style for the title line.
    pub fn title_descriptor(self) -> StyleDescriptor {
        self.descriptor().modifiers(Modifier::BOLD)
    }

    /// Glyph shown when the caller supplies no icon.
    pub fn default_icon(self) -> &'static str {
        match self {
            Self::Default | Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleKey;

    #[test]
    fn test_default_and_info_share_a_look() {
        assert_eq!(AlertVariant::Default.descriptor(), AlertVariant::Info.descriptor());
        assert_ne!(ToastVariant::Default.descriptor(), ToastVariant::Info.descriptor());
    }

    #[test]
    fn test_icons() {
        assert_eq!(ToastVariant::Success.default_icon(), "✓");
        assert_eq!(AlertVariant::Error.default_icon(), "✗");
        for variant in ToastVariant::ALL {
            assert!(!variant.default_icon().is_empty());
        }
    }

    #[test]
    fn test_outline_alert_has_no_fill() {
        let d = AlertVariant::Outline.descriptor();
        assert!(d.bg.is_none());
        assert!(d.has_border());
    }

    #[test]
    fn test_toast_variant_fallback() {
        assert_eq!(ToastVariant::from_name("danger"), ToastVariant::Default);
        assert_eq!(ToastVariant::from_name("WARNING"), ToastVariant::Warning);
    }
}
