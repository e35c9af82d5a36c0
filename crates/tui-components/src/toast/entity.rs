//! Toast records and the specs they are created from.

use std::fmt;
use std::time::Duration;
use tui_style::{Size, ToastVariant};

/// Auto-dismiss delay used when a spec does not set one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Identifier of a toast, unique within the stack that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub(crate) u64);

impl ToastId {
    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Everything needed to create a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSpec {
    /// Semantic variant.
    pub variant: ToastVariant,
    /// Padding size.
    pub size: Size,
    /// Optional bold first line.
    pub title: Option<String>,
    /// Optional body text.
    pub message: Option<String>,
    /// Optional icon glyph. The variant's glyph is used when absent.
    pub icon: Option<String>,
    /// Time spent visible before auto-dismissal. Zero never auto-dismisses.
    pub duration: Duration,
    /// Whether a close glyph is shown.
    pub closable: bool,
}

impl Default for ToastSpec {
    fn default() -> Self {
        Self {
            variant: ToastVariant::default(),
            size: Size::default(),
            title: None,
            message: None,
            icon: None,
            duration: DEFAULT_DURATION,
            closable: true,
        }
    }
}

impl ToastSpec {
    /// Create a default spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// A spec with the given variant and message.
    pub fn with_message(variant: ToastVariant, message: impl Into<String>) -> Self {
        Self::new().variant(variant).message(message)
    }

    /// A success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_message(ToastVariant::Success, message)
    }

    /// A warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_message(ToastVariant::Warning, message)
    }

    /// An error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_message(ToastVariant::Error, message)
    }

    /// An info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_message(ToastVariant::Info, message)
    }

    /// Set the variant.
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set a custom icon glyph.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the auto-dismiss delay.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the auto-dismiss delay in milliseconds.
    pub fn duration_ms(self, ms: u64) -> Self {
        self.duration(Duration::from_millis(ms))
    }

    /// Never auto-dismiss.
    pub fn sticky(self) -> Self {
        self.duration(Duration::ZERO)
    }

    /// Set whether the toast can be closed by the user.
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

/// A single notification owned by a [`ToastStack`](super::ToastStack).
///
/// Fields never change after creation. Lifecycle phases live in the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    spec: ToastSpec,
}

impl Toast {
    pub(crate) fn new(id: ToastId, spec: ToastSpec) -> Self {
        Self { id, spec }
    }

    /// Identifier.
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Semantic variant.
    pub fn variant(&self) -> ToastVariant {
        self.spec.variant
    }

    /// Padding size.
    pub fn size(&self) -> Size {
        self.spec.size
    }

    /// Title, if any.
    pub fn title(&self) -> Option<&str> {
        self.spec.title.as_deref()
    }

    /// Message, if any.
    pub fn message(&self) -> Option<&str> {
        self.spec.message.as_deref()
    }

    /// Icon to display: the custom glyph or the variant default.
    pub fn icon(&self) -> &str {
        self.spec
            .icon
            .as_deref()
            .unwrap_or_else(|| self.spec.variant.default_icon())
    }

    /// Auto-dismiss delay. Zero means never.
    pub fn duration(&self) -> Duration {
        self.spec.duration
    }

    /// Whether the toast auto-dismisses.
    pub fn auto_dismisses(&self) -> bool {
        !self.spec.duration.is_zero()
    }

    /// Whether a close glyph is shown.
    pub fn closable(&self) -> bool {
        self.spec.closable
    }

    /// The spec this toast was created from.
    pub fn spec(&self) -> &ToastSpec {
        &self.spec
    }
}
