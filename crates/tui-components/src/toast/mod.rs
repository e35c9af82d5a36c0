//! Toast notifications.
//!
//! # Example
//!
//! ```ignore
//! use tui_components::toast::{ToastConfig, ToastProvider, ToastSpec};
//!
//! let provider = ToastProvider::new(ToastConfig::default());
//! let toasts = provider.handle();
//!
//! // Handles are cheap to clone and safe to keep in callbacks.
//! let id = toasts.show(ToastSpec::success("Saved").title("Profile"));
//!
//! // In the event loop:
//! provider.tick();
//! provider.render(frame.area(), frame.buffer_mut());
//! ```

mod config;
mod entity;
mod provider;
mod region;
mod stack;
mod surface;

pub use config::{ToastConfig, ToastPosition};
pub use entity::{Toast, ToastId, ToastSpec, DEFAULT_DURATION};
pub use provider::{ToastHandle, ToastProvider};
pub use region::ToastRegion;
pub use stack::{ListenerId, StackEvent, ToastStack};
pub use surface::{ToastPhase, ToastSurface, ToastTransition};
