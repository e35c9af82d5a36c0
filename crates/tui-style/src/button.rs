//! Button variants.

use crate::colors::{Hue, Shade, BLACK, CHARCOAL, WHITE};
use crate::descriptor::{BorderType, StyleDescriptor};
use crate::key::style_key;
use ratatui::style::{Color, Modifier};

style_key! {
    /// Visual variant of a button.
    pub enum ButtonVariant("button") {
        Primary => "primary",
        Secondary => "secondary",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Rose => "rose",
        Black => "black",
        Gray => "gray",
        White => "white",
        Orange => "orange",
        Cyan => "cyan",
        Ghost => "ghost",
        OutlinePrimary => "outline-primary",
        OutlineGray => "outline-gray",
        Outline => "outline",
        Transparent => "transparent",
        BlackOutline => "black-outline",
        Danger => "danger",
        DangerOutline => "danger-outline",
        Purple => "purple",
        Pink => "pink",
        Indigo => "indigo",
        Teal => "teal",
        Emerald => "emerald",
        Amber => "amber",
        Lime => "lime",
        Sky => "sky",
        Violet => "violet",
        Fuchsia => "fuchsia",
        Slate => "slate",
        Zinc => "zinc",
        Neutral => "neutral",
        Stone => "stone",
        Red => "red",
        Green => "green",
        Yellow => "yellow",
        Blue => "blue",
        OutlinePurple => "outline-purple",
        OutlinePink => "outline-pink",
        OutlineIndigo => "outline-indigo",
        OutlineTeal => "outline-teal",
        OutlineEmerald => "outline-emerald",
        OutlineAmber => "outline-amber",
        OutlineLime => "outline-lime",
        OutlineSky => "outline-sky",
        OutlineViolet => "outline-violet",
        OutlineFuchsia => "outline-fuchsia",
        Glass => "glass",
        Neon => "neon",
        Metallic => "metallic",
        Soft => "soft",
        Bordered => "bordered",
        GradientBlue => "gradient-blue",
        GradientGreen => "gradient-green",
        GradientPink => "gradient-pink",
        GradientOrange => "gradient-orange",
        GradientViolet => "gradient-violet",
        GradientSunset => "gradient-sunset",
        GradientOcean => "gradient-ocean",
        GradientFire => "gradient-fire",
        GlassBlue => "glass-blue",
        GlassPink => "glass-pink",
        GlassGreen => "glass-green",
        ShadowBlue => "shadow-blue",
        ShadowPink => "shadow-pink",
        ShadowOrange => "shadow-orange",
        OutlineDashed => "outline-dashed",
        OutlineDotted => "outline-dotted",
        OutlineDouble => "outline-double",
        GhostBlue => "ghost-blue",
        GhostGreen => "ghost-green",
        GhostPink => "ghost-pink",
    }
    default = Primary;
}

const fn filled(bg: Color, fg: Color) -> StyleDescriptor {
    StyleDescriptor::new().bg(bg).fg(fg)
}

fn solid(hue: Hue) -> StyleDescriptor {
    filled(hue.shade(Shade::Solid), WHITE)
}

fn outlined(hue: Hue) -> StyleDescriptor {
    StyleDescriptor::new()
        .fg(hue.shade(Shade::Base))
        .border(hue.shade(Shade::Base))
}

fn ghosted(hue: Hue) -> StyleDescriptor {
    StyleDescriptor::new()
        .fg(hue.shade(Shade::Solid))
        .border(hue.shade(Shade::Light))
}

/// Gradients collapse to their leading stop.
fn gradient(from: Hue) -> StyleDescriptor {
    filled(from.shade(Shade::Base), WHITE).modifiers(Modifier::BOLD)
}

fn glass_tint(hue: Hue) -> StyleDescriptor {
    StyleDescriptor::new()
        .fg(hue.shade(Shade::Ink))
        .bg(hue.shade(Shade::Soft))
        .border(hue.shade(Shade::Light))
        .border_type(BorderType::Rounded)
}

fn shadowed(hue: Hue, shade: Shade) -> StyleDescriptor {
    filled(hue.shade(shade), WHITE).modifiers(Modifier::BOLD)
}

impl ButtonVariant {
    /// Resolve this variant to its style descriptor.
    pub fn descriptor(self) -> StyleDescriptor {
        match self {
            Self::Primary => solid(Hue::Blue),
            Self::Secondary => filled(Hue::Gray.shade(Shade::Soft), Hue::Gray.shade(Shade::Deep)),
            Self::Success => solid(Hue::Green),
            Self::Warning => solid(Hue::Yellow),
            Self::Error | Self::Danger | Self::Red => solid(Hue::Red),
            Self::Rose => solid(Hue::Rose),
            Self::Black => filled(BLACK, WHITE),
            Self::Gray => filled(Hue::Gray.shade(Shade::Light), WHITE),
            Self::White => filled(WHITE, BLACK),
            Self::Orange => filled(Hue::Orange.shade(Shade::Light), WHITE),
            Self::Cyan => filled(Hue::Cyan.shade(Shade::Base), WHITE),
            Self::Ghost => StyleDescriptor::new().fg(Hue::Gray.shade(Shade::Deep)),
            Self::OutlinePrimary => outlined(Hue::Blue),
            Self::OutlineGray => StyleDescriptor::new()
                .fg(Hue::Gray.shade(Shade::Soft))
                .border(Hue::Gray.shade(Shade::Base)),
            Self::Outline => StyleDescriptor::new()
                .fg(Hue::Gray.shade(Shade::Deep))
                .bg(WHITE)
                .border(Hue::Gray.shade(Shade::Light)),
            Self::Transparent => StyleDescriptor::new().fg(Hue::Gray.shade(Shade::Solid)),
            Self::BlackOutline => StyleDescriptor::new()
                .fg(WHITE)
                .bg(CHARCOAL)
                .border(Color::Rgb(68, 68, 68)),
            Self::DangerOutline => outlined(Hue::Red),
            Self::Purple => solid(Hue::Purple),
            Self::Pink => solid(Hue::Pink),
            Self::Indigo => solid(Hue::Indigo),
            Self::Teal => solid(Hue::Teal),
            Self::Emerald => solid(Hue::Emerald),
            Self::Amber => solid(Hue::Amber),
            Self::Lime => solid(Hue::Lime),
            Self::Sky => solid(Hue::Sky),
            Self::Violet => solid(Hue::Violet),
            Self::Fuchsia => solid(Hue::Fuchsia),
            Self::Slate => solid(Hue::Slate),
            Self::Zinc => solid(Hue::Zinc),
            Self::Neutral => solid(Hue::Neutral),
            Self::Stone => solid(Hue::Stone),
            Self::Green => solid(Hue::Green),
            Self::Yellow => solid(Hue::Yellow),
            Self::Blue => solid(Hue::Blue),
            Self::OutlinePurple => outlined(Hue::Purple),
            Self::OutlinePink => outlined(Hue::Pink),
            Self::OutlineIndigo => outlined(Hue::Indigo),
            Self::OutlineTeal => outlined(Hue::Teal),
            Self::OutlineEmerald => outlined(Hue::Emerald),
            Self::OutlineAmber => outlined(Hue::Amber),
            Self::OutlineLime => outlined(Hue::Lime),
            Self::OutlineSky => outlined(Hue::Sky),
            Self::OutlineViolet => outlined(Hue::Violet),
            Self::OutlineFuchsia => outlined(Hue::Fuchsia),
            Self::Glass => StyleDescriptor::new()
                .fg(WHITE)
                .border(Hue::Slate.shade(Shade::Soft))
                .border_type(BorderType::Rounded),
            Self::Neon => filled(Hue::Cyan.shade(Shade::Light), WHITE)
                .modifiers(Modifier::BOLD),
            Self::Metallic => gradient(Hue::Gray),
            Self::Soft => filled(Hue::Pink.shade(Shade::Light), WHITE),
            Self::Bordered => StyleDescriptor::new()
                .fg(Hue::Gray.shade(Shade::Deep))
                .bg(WHITE)
                .border(Hue::Gray.shade(Shade::Soft))
                .border_type(BorderType::Thick),
            Self::GradientBlue => gradient(Hue::Blue),
            Self::GradientGreen => gradient(Hue::Green),
            Self::GradientPink => gradient(Hue::Pink),
            Self::GradientOrange => gradient(Hue::Orange),
            Self::GradientViolet => gradient(Hue::Violet),
            Self::GradientSunset => gradient(Hue::Rose),
            Self::GradientOcean => gradient(Hue::Cyan),
            Self::GradientFire => gradient(Hue::Amber),
            Self::GlassBlue => glass_tint(Hue::Blue),
            Self::GlassPink => glass_tint(Hue::Pink),
            Self::GlassGreen => glass_tint(Hue::Green),
            Self::ShadowBlue => shadowed(Hue::Blue, Shade::Solid),
            Self::ShadowPink => shadowed(Hue::Pink, Shade::Solid),
            Self::ShadowOrange => shadowed(Hue::Orange, Shade::Base),
            Self::OutlineDashed => StyleDescriptor::new()
                .fg(Hue::Blue.shade(Shade::Solid))
                .bg(WHITE)
                .border(Hue::Blue.shade(Shade::Light))
                .border_type(BorderType::Dashed),
            Self::OutlineDotted => StyleDescriptor::new()
                .fg(Hue::Pink.shade(Shade::Solid))
                .bg(WHITE)
                .border(Hue::Pink.shade(Shade::Light))
                .border_type(BorderType::Dashed),
            Self::OutlineDouble => StyleDescriptor::new()
                .fg(Hue::Green.shade(Shade::Solid))
                .bg(WHITE)
                .border(Hue::Green.shade(Shade::Light))
                .border_type(BorderType::Double),
            Self::GhostBlue => ghosted(Hue::Blue),
            Self::GhostGreen => ghosted(Hue::Green),
            Self::GhostPink => ghosted(Hue::Pink),
        }
    }

    /// Style applied when the button is disabled or loading.
    pub fn disabled_descriptor(self) -> StyleDescriptor {
        self.descriptor().modifiers(Modifier::DIM)
    }

    /// Style applied when the button has focus.
    pub fn focused_descriptor(self) -> StyleDescriptor {
        self.descriptor().modifiers(Modifier::BOLD | Modifier::REVERSED)
    }
}
