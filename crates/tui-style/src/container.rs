//! Table and confirm-dialog variants.
//!
//! Both are large surfaces with the same four looks. Glass variants have no
//! fill in a terminal; they keep the text and border tint only.

use crate::button::ButtonVariant;
use crate::colors::{Hue, Shade, BLACK, WHITE};
use crate::descriptor::{BorderType, StyleDescriptor};
use crate::key::style_key;
use ratatui::style::Modifier;

style_key! {
    /// Visual variant of a table.
    pub enum TableVariant("table") {
        Dark => "dark",
        Light => "light",
        Glass => "glass",
        BlackGlass => "blackGlass",
    }
    default = Dark;
}

impl TableVariant {
    /// Header row style.
    pub fn header(self) -> StyleDescriptor {
        let d = match self {
            Self::Dark => StyleDescriptor::new()
                .fg(WHITE)
                .bg(Hue::Gray.shade(Shade::Ink))
                .border(Hue::Gray.shade(Shade::Strong)),
            Self::Light => StyleDescriptor::new()
                .fg(Hue::Gray.shade(Shade::Ink))
                .bg(Hue::Gray.shade(Shade::Wash))
                .border(Hue::Gray.shade(Shade::Soft)),
            Self::Glass => StyleDescriptor::new()
                .fg(WHITE)
                .border(Hue::Slate.shade(Shade::Light)),
            Self::BlackGlass => StyleDescriptor::new()
                .fg(WHITE)
                .border(Hue::Zinc.shade(Shade::Strong)),
        };
        d.modifiers(Modifier::BOLD)
    }

    /// Body row style.
    pub fn body(self) -> StyleDescriptor {
        match self {
            Self::Dark => StyleDescriptor::new()
                .fg(WHITE)
                .bg(Hue::Gray.shade(Shade::Deep))
                .border(Hue::Gray.shade(Shade::Solid)),
            Self::Light => StyleDescriptor::new()
                .fg(Hue::Gray.shade(Shade::Ink))
                .bg(WHITE)
                .border(Hue::Gray.shade(Shade::Soft)),
            Self::Glass => StyleDescriptor::new()
                .fg(WHITE)
                .border(Hue::Slate.shade(Shade::Soft)),
            Self::BlackGlass => StyleDescriptor::new()
                .fg(WHITE)
                .border(Hue::Zinc.shade(Shade::Deep)),
        }
    }

    /// Style for the row under the cursor.
    pub fn highlight(self) -> StyleDescriptor {
        let bg = match self {
            Self::Dark => Hue::Gray.shade(Shade::Strong),
            Self::Light => Hue::Gray.shade(Shade::Wash),
            Self::Glass => Hue::Slate.shade(Shade::Solid),
            Self::BlackGlass => Hue::Zinc.shade(Shade::Ink),
        };
        self.body().bg(bg).modifiers(Modifier::BOLD)
    }

    /// Style for the empty-state message.
    pub fn muted(self) -> StyleDescriptor {
        let fg = match self {
            Self::Dark | Self::BlackGlass => Hue::Gray.shade(Shade::Soft),
            Self::Light | Self::Glass => Hue::Gray.shade(Shade::Base),
        };
        StyleDescriptor::new().fg(fg)
    }

    /// Whether the body sits on a dark fill.
    pub fn is_dark(self) -> bool {
        !matches!(self, Self::Light)
    }
}

style_key! {
    /// Visual variant of a confirm dialog.
    pub enum DialogVariant("dialog") {
        Dark => "dark",
        Light => "light",
        BlackGlass => "blackGlass",
        Glass => "glass",
    }
    default = Light;
}

impl DialogVariant {
    /// Frame style for the dialog box.
    pub fn descriptor(self) -> StyleDescriptor {
        let d = match self {
            Self::Dark => StyleDescriptor::new()
                .fg(WHITE)
                .bg(Hue::Gray.shade(Shade::Ink))
                .border(Hue::Gray.shade(Shade::Strong)),
            Self::Light => StyleDescriptor::new()
                .fg(Hue::Gray.shade(Shade::Ink))
                .bg(Hue::Gray.shade(Shade::Wash))
                .border(Hue::Gray.shade(Shade::Soft)),
            Self::Glass => StyleDescriptor::new()
                .fg(WHITE)
                .border(Hue::Slate.shade(Shade::Soft)),
            Self::BlackGlass => StyleDescriptor::new()
                .fg(WHITE)
                .border(BLACK),
        };
        d.border_type(BorderType::Rounded)
    }

    /// Style for the dialog icon.
    pub fn icon(self) -> StyleDescriptor {
        let fg = match self {
            Self::Dark | Self::BlackGlass => Hue::Yellow.shade(Shade::Light),
            Self::Light => Hue::Blue.shade(Shade::Base),
            Self::Glass => Hue::Yellow.shade(Shade::Soft),
        };
        StyleDescriptor::new().fg(fg)
    }

    /// Button variants for the confirm and cancel actions.
    pub fn button_variants(self) -> (ButtonVariant, ButtonVariant) {
        match self {
            Self::Dark | Self::BlackGlass | Self::Glass => {
                (ButtonVariant::Outline, ButtonVariant::BlackOutline)
            }
            Self::Light => (ButtonVariant::Primary, ButtonVariant::Rose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleKey;

    #[test]
    fn test_table_variant_names() {
        assert_eq!(TableVariant::from_name("blackGlass"), TableVariant::BlackGlass);
        assert_eq!(TableVariant::from_name("sepia"), TableVariant::Dark);
    }

    #[test]
    fn test_header_is_bold() {
        for variant in TableVariant::ALL {
            assert!(variant.header().modifiers.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn test_dialog_buttons_follow_variant() {
        assert_eq!(
            DialogVariant::Light.button_variants(),
            (ButtonVariant::Primary, ButtonVariant::Rose)
        );
        for variant in [DialogVariant::Dark, DialogVariant::Glass, DialogVariant::BlackGlass] {
            assert_eq!(
                variant.button_variants(),
                (ButtonVariant::Outline, ButtonVariant::BlackOutline)
            );
        }
    }

    #[test]
    fn test_dialog_default_is_light() {
        assert_eq!(DialogVariant::default(), DialogVariant::Light);
    }
}
