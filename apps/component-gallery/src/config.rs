//! Gallery configuration.

use crate::error::{GalleryError, GalleryResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tui_components::toast::ToastConfig;
use tui_style::{ButtonVariant, TableVariant};

const APP_NAME: &str = "component-gallery";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub toasts: ToastConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableConfig {
    #[serde(default)]
    pub variant: TableVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_button")]
    pub button: ButtonVariant,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_button() -> ButtonVariant {
    ButtonVariant::Primary
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            toasts: ToastConfig::default(),
            table: TableConfig::default(),
            theme: ThemeConfig::default(),
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            button: default_button(),
        }
    }
}

impl GalleryConfig {
    /// Load from `path`, or from the platform config dir when `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> GalleryResult<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_from(path: &Path) -> GalleryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GalleryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| GalleryError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> GalleryResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Directory the log file is written to.
    pub fn log_dir() -> GalleryResult<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|d| d.data_local_dir().to_path_buf())
            .ok_or(GalleryError::NoProjectDirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_components::toast::ToastPosition;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(GalleryConfig::parse("").unwrap(), GalleryConfig::default());
    }

    #[test]
    fn test_sections() {
        let config = GalleryConfig::parse(
            r#"
            log_level = "debug"
            tick_rate_ms = 50

            [toasts]
            position = "bottom-left"
            max_visible = 3

            [table]
            variant = "blackGlass"

            [theme]
            button = "gradient-ocean"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.toasts.position, ToastPosition::BottomLeft);
        assert_eq!(config.toasts.max_visible, 3);
        assert_eq!(config.toasts.exit_duration_ms, 300);
        assert_eq!(config.table.variant, TableVariant::BlackGlass);
        assert_eq!(config.theme.button, ButtonVariant::GradientOcean);
    }

    #[test]
    fn test_unknown_variant_falls_back() {
        let config = GalleryConfig::parse("[table]\nvariant = \"sepia\"").unwrap();
        assert_eq!(config.table.variant, TableVariant::Dark);
    }

    #[test]
    fn test_round_trip() {
        let mut config = GalleryConfig::default();
        config.toasts.position = ToastPosition::TopCenter;
        let text = config.to_toml().unwrap();
        assert_eq!(GalleryConfig::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = GalleryConfig::load(Some(Path::new("/nonexistent/gallery.toml"))).unwrap_err();
        assert!(matches!(err, GalleryError::Read { .. }));
    }
}
