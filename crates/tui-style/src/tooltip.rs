//! Tooltip variants and placement.

use crate::colors::{Hue, Shade, CHARCOAL, WHITE};
use crate::descriptor::{BorderType, StyleDescriptor};
use crate::key::style_key;
use ratatui::style::Color;

style_key! {
    /// Visual variant of a tooltip bubble.
    pub enum TooltipVariant("tooltip") {
        Default => "default",
        Primary => "primary",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",
        Dark => "dark",
        Light => "light",
        Glass => "glass",
        BlackGlass => "blackGlass",
        Rose => "rose",
        Purple => "purple",
        Teal => "teal",
        Sky => "sky",
        Violet => "violet",
        Orange => "orange",
        Cyan => "cyan",
        Pink => "pink",
    }
    default = Default;
}

fn bubble(hue: Hue, fill: Shade, edge: Shade) -> StyleDescriptor {
    StyleDescriptor::new()
        .fg(WHITE)
        .bg(hue.shade(fill))
        .border(hue.shade(edge))
}

impl TooltipVariant {
    /// Resolve this variant to its style descriptor.
    pub fn descriptor(self) -> StyleDescriptor {
        match self {
            Self::Default => StyleDescriptor::new()
                .fg(WHITE)
                .bg(CHARCOAL)
                .border(Color::Rgb(68, 68, 68)),
            Self::Primary => bubble(Hue::Blue, Shade::Solid, Shade::Base),
            Self::Success => bubble(Hue::Green, Shade::Solid, Shade::Base),
            Self::Warning => bubble(Hue::Yellow, Shade::Solid, Shade::Base),
            Self::Error => bubble(Hue::Red, Shade::Solid, Shade::Base),
            Self::Info => bubble(Hue::Blue, Shade::Base, Shade::Light),
            Self::Dark => bubble(Hue::Gray, Shade::Ink, Shade::Strong),
            Self::Light => StyleDescriptor::new()
                .fg(Hue::Gray.shade(Shade::Ink))
                .bg(WHITE)
                .border(Hue::Gray.shade(Shade::Soft)),
            Self::Glass | Self::BlackGlass => StyleDescriptor::new()
                .fg(WHITE)
                .border_type(BorderType::None),
            Self::Rose => bubble(Hue::Rose, Shade::Base, Shade::Light),
            Self::Purple => bubble(Hue::Purple, Shade::Solid, Shade::Base),
            Self::Teal => bubble(Hue::Teal, Shade::Solid, Shade::Base),
            Self::Sky => bubble(Hue::Sky, Shade::Solid, Shade::Base),
            Self::Violet => bubble(Hue::Violet, Shade::Solid, Shade::Base),
            Self::Orange => bubble(Hue::Orange, Shade::Base, Shade::Light),
            Self::Cyan => bubble(Hue::Cyan, Shade::Base, Shade::Light),
            Self::Pink => bubble(Hue::Pink, Shade::Solid, Shade::Base),
        }
    }

    /// Color of the arrow glyph pointing at the anchor.
    pub fn arrow_color(self) -> Option<Color> {
        let d = self.descriptor();
        d.border.or(d.bg).or(d.fg)
    }
}

style_key! {
    /// Side of the anchor the bubble appears on.
    pub enum Placement("placement") {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
    default = Top;
}

impl Placement {
    /// Arrow glyph pointing from the bubble back to the anchor.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Top => "▼",
            Self::Bottom => "▲",
            Self::Left => "▶",
            Self::Right => "◀",
        }
    }
}

style_key! {
    /// Horizontal alignment of a top or bottom bubble.
    ///
    /// `left` extends the bubble leftwards from the anchor's right edge and
    /// `right` extends it rightwards from the anchor's left edge.
    pub enum Align("align") {
        Center => "center",
        Left => "left",
        Right => "right",
    }
    default = Center;
}
