//! # tui-style
//!
//! Style registry for the component kit.
//!
//! ## Features
//!
//! - Enumerated variant, size and rounding keys per widget family
//! - Flat key-to-descriptor tables, looked up on every render
//! - Lenient name lookup that falls back to the family default
//! - Serde support by catalog name for config files

mod button;
mod colors;
mod container;
mod descriptor;
mod feedback;
mod input;
mod key;
mod loading;
mod size;
mod tooltip;

pub use button::ButtonVariant;
pub use colors::{Hue, Shade, BLACK, CHARCOAL, WHITE};
pub use container::{DialogVariant, TableVariant};
pub use descriptor::{BorderType, StyleDescriptor};
pub use feedback::{AlertVariant, ToastVariant};
pub use input::InputVariant;
pub use key::StyleKey;
pub use loading::{spinner_color, LoadingVariant, DOT_COLORS};
pub use size::{Rounded, Size};
pub use tooltip::{Align, Placement, TooltipVariant};

/// Errors from strict style lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("unknown {family} variant: {name:?}")]
    UnknownVariant { family: &'static str, name: String },
}

/// Result type for style lookups.
pub type StyleResult<T> = Result<T, StyleError>;

/// Widget families with a variant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    Alert,
    Toast,
    Table,
    Dialog,
    Tooltip,
    Input,
}

impl WidgetKind {
    /// Every widget family.
    pub const ALL: [WidgetKind; 7] = [
        WidgetKind::Button,
        WidgetKind::Alert,
        WidgetKind::Toast,
        WidgetKind::Table,
        WidgetKind::Dialog,
        WidgetKind::Tooltip,
        WidgetKind::Input,
    ];

    /// Catalog names of this family's variants.
    pub fn variant_names(self) -> Vec<&'static str> {
        fn names<K: StyleKey>() -> Vec<&'static str> {
            K::ALL.iter().map(|k| k.name()).collect()
        }
        match self {
            Self::Button => names::<ButtonVariant>(),
            Self::Alert => names::<AlertVariant>(),
            Self::Toast => names::<ToastVariant>(),
            Self::Table => names::<TableVariant>(),
            Self::Dialog => names::<DialogVariant>(),
            Self::Tooltip => names::<TooltipVariant>(),
            Self::Input => names::<InputVariant>(),
        }
    }
}

/// Resolve a variant name for a widget family.
///
/// Unknown names resolve to the family's default descriptor. For tables this
/// is the body style.
pub fn resolve(widget: WidgetKind, name: &str) -> StyleDescriptor {
    match widget {
        WidgetKind::Button => ButtonVariant::from_name(name).descriptor(),
        WidgetKind::Alert => AlertVariant::from_name(name).descriptor(),
        WidgetKind::Toast => ToastVariant::from_name(name).descriptor(),
        WidgetKind::Table => TableVariant::from_name(name).body(),
        WidgetKind::Dialog => DialogVariant::from_name(name).descriptor(),
        WidgetKind::Tooltip => TooltipVariant::from_name(name).descriptor(),
        WidgetKind::Input => InputVariant::from_name(name).descriptor(),
    }
}

/// Resolve a variant name, failing on unknown names.
pub fn try_resolve(widget: WidgetKind, name: &str) -> StyleResult<StyleDescriptor> {
    Ok(match widget {
        WidgetKind::Button => name.parse::<ButtonVariant>()?.descriptor(),
        WidgetKind::Alert => name.parse::<AlertVariant>()?.descriptor(),
        WidgetKind::Toast => name.parse::<ToastVariant>()?.descriptor(),
        WidgetKind::Table => name.parse::<TableVariant>()?.body(),
        WidgetKind::Dialog => name.parse::<DialogVariant>()?.descriptor(),
        WidgetKind::Tooltip => name.parse::<TooltipVariant>()?.descriptor(),
        WidgetKind::Input => name.parse::<InputVariant>()?.descriptor(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known() {
        assert_eq!(
            resolve(WidgetKind::Alert, "success"),
            AlertVariant::Success.descriptor()
        );
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        assert_eq!(
            resolve(WidgetKind::Toast, "nope"),
            ToastVariant::Default.descriptor()
        );
        assert_eq!(
            resolve(WidgetKind::Table, ""),
            TableVariant::Dark.body()
        );
    }

    #[test]
    fn test_try_resolve_unknown() {
        let err = try_resolve(WidgetKind::Dialog, "sepia").unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownVariant {
                family: "dialog",
                name: "sepia".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown dialog variant: \"sepia\"");
    }

    #[test]
    fn test_variant_listings() {
        insta::assert_snapshot!(
            WidgetKind::Table.variant_names().join(", "),
            @"dark, light, glass, blackGlass"
        );
        insta::assert_snapshot!(
            WidgetKind::Toast.variant_names().join(", "),
            @"default, success, warning, error, info"
        );
        insta::assert_snapshot!(
            WidgetKind::Alert.variant_names().join(", "),
            @"default, success, warning, error, info, outline"
        );
        insta::assert_snapshot!(
            WidgetKind::Input.variant_names().join(", "),
            @"default, outline, filled, bordered, underlined"
        );
    }

    #[test]
    fn test_names_are_unique_per_family() {
        for widget in WidgetKind::ALL {
            let mut names = widget.variant_names();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "{widget:?}");
        }
    }

    #[test]
    fn test_config_roundtrip_by_name() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Prefs {
            button: ButtonVariant,
            table: TableVariant,
        }

        let prefs: Prefs = toml::from_str("button = \"ghost-pink\"\ntable = \"nonsense\"").unwrap();
        assert_eq!(prefs.button, ButtonVariant::GhostPink);
        assert_eq!(prefs.table, TableVariant::Dark);

        let out = toml::to_string(&prefs).unwrap();
        assert!(out.contains("button = \"ghost-pink\""));
    }
}
