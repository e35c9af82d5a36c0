//! Component error types.

use thiserror::Error;

/// Errors from toast handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ToastError {
    /// The provider behind the handle has been torn down.
    #[error("toast handle used after its ToastProvider was dropped")]
    RegionClosed,

    /// The region is already borrowed, e.g. a handle used from inside a stack listener.
    #[error("toast region is busy")]
    RegionBusy,
}

/// Result type for toast handle operations.
pub type ToastResult<T> = Result<T, ToastError>;
