//! Toast surface configuration.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Screen anchor of the toast column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// Every anchor.
    pub const ALL: [ToastPosition; 6] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Whether toasts grow downward from the top edge.
    pub fn is_top(&self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }

    /// Column of `width` cells inside `area`, one cell in from the anchored edges.
    pub fn column(&self, area: Rect, width: u16) -> Rect {
        let margin = if area.width > width.saturating_add(2) { 1 } else { 0 };
        let width = width.min(area.width.saturating_sub(margin * 2));
        let x = match self {
            Self::TopLeft | Self::BottomLeft => area.x + margin,
            Self::TopCenter | Self::BottomCenter => area.x + (area.width.saturating_sub(width)) / 2,
            Self::TopRight | Self::BottomRight => {
                area.x + area.width.saturating_sub(width + margin)
            }
        };
        let vmargin = if area.height > 2 { 1 } else { 0 };
        Rect::new(
            x,
            area.y + vmargin,
            width,
            area.height.saturating_sub(vmargin * 2),
        )
    }
}

/// Configuration for a toast surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Screen anchor.
    #[serde(default)]
    pub position: ToastPosition,
    /// Maximum toasts rendered at once; the rest wait in order.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    /// Length of the entering phase in milliseconds.
    #[serde(default = "default_enter_delay")]
    pub enter_delay_ms: u64,
    /// Length of the exiting phase in milliseconds.
    #[serde(default = "default_exit_duration")]
    pub exit_duration_ms: u64,
    /// Width of a toast in cells.
    #[serde(default = "default_width")]
    pub width: u16,
}

fn default_max_visible() -> usize {
    5
}

fn default_enter_delay() -> u64 {
    50
}

fn default_exit_duration() -> u64 {
    300
}

fn default_width() -> u16 {
    40
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: ToastPosition::default(),
            max_visible: default_max_visible(),
            enter_delay_ms: default_enter_delay(),
            exit_duration_ms: default_exit_duration(),
            width: default_width(),
        }
    }
}

impl ToastConfig {
    /// Set the anchor.
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// Set the visible cap.
    pub fn max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Length of the entering phase.
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    /// Length of the exiting phase.
    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }
}
