//! Enumerated style keys.
//!
//! Every widget family exposes its variants, sizes and roundings as a plain
//! enum. Names match the catalog's option strings (`"outline-primary"`,
//! `"blackGlass"`, ...) so keys can round-trip through config files.

use crate::{StyleError, StyleResult};

/// Implemented by every enumerated style key.
pub trait StyleKey: Copy + Default + PartialEq + 'static {
    /// Family name used in errors and log messages.
    const FAMILY: &'static str;

    /// Every key, in catalog order.
    const ALL: &'static [Self];

    /// Catalog name of this key.
    fn name(self) -> &'static str;

    /// Look up a key by name. Matching ignores ASCII case.
    fn parse_strict(name: &str) -> StyleResult<Self> {
        let trimmed = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| StyleError::UnknownVariant {
                family: Self::FAMILY,
                name: name.to_string(),
            })
    }

    /// Look up a key by name, falling back to the family default.
    fn from_name(name: &str) -> Self {
        match Self::parse_strict(name) {
            Ok(key) => key,
            Err(_) => {
                let fallback = Self::default();
                tracing::warn!(
                    family = Self::FAMILY,
                    name,
                    fallback = fallback.name(),
                    "unknown style key, using default"
                );
                fallback
            }
        }
    }

    /// Position of this key in [`StyleKey::ALL`].
    fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    /// The key after this one, wrapping around.
    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The key before this one, wrapping around.
    fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Declare an enumerated style key.
///
/// Generates the enum plus `Default`, [`StyleKey`], `Display`, a strict
/// `FromStr`, `Serialize` by name and a lenient `Deserialize` that falls back
/// to the default key.
macro_rules! style_key {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($family:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $crate::key::StyleKey for $name {
            const FAMILY: &'static str = $family;
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $key ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::key::StyleKey::name(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::StyleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::key::StyleKey>::parse_strict(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::key::StyleKey::name(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<Self as $crate::key::StyleKey>::from_name(&name))
            }
        }
    };
}

pub(crate) use style_key;

#[cfg(test)]
mod tests {
    use super::*;

    style_key! {
        /// Test-only key.
        enum Fruit("fruit") {
            Apple => "apple",
            BloodOrange => "blood-orange",
            Kiwi => "kiwi",
        }
        default = Apple;
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!("kiwi".parse::<Fruit>().unwrap(), Fruit::Kiwi);
        assert_eq!("Blood-Orange".parse::<Fruit>().unwrap(), Fruit::BloodOrange);
        assert!(matches!(
            "durian".parse::<Fruit>(),
            Err(StyleError::UnknownVariant { family: "fruit", .. })
        ));
    }

    #[test]
    fn test_from_name_falls_back() {
        assert_eq!(Fruit::from_name("durian"), Fruit::Apple);
        assert_eq!(Fruit::from_name(""), Fruit::Apple);
        assert_eq!(Fruit::from_name("kiwi"), Fruit::Kiwi);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Fruit::Apple.next(), Fruit::BloodOrange);
        assert_eq!(Fruit::Kiwi.next(), Fruit::Apple);
        assert_eq!(Fruit::Apple.prev(), Fruit::Kiwi);
    }

    #[test]
    fn test_display_uses_catalog_name() {
        assert_eq!(Fruit::BloodOrange.to_string(), "blood-orange");
    }
}
