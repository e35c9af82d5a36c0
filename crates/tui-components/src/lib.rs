//! # tui-components
//!
//! Terminal widgets built on Ratatui and styled through `tui-style`.
//!
//! ## Components
//!
//! - [`toast`] - Notification stack with queued display and timed lifecycle
//! - [`table`] - Table with click-to-order headers and row activation
//! - [`Alert`], [`Badge`], [`Button`], [`ConfirmDialog`], [`Icon`],
//!   [`Input`], [`Loading`], [`Tooltip`] - Catalog widgets
//!
//! ## Architecture
//!
//! - Widgets are built per frame and render through `Widget` or
//!   `StatefulWidget`; anything that must survive a frame lives in a state type
//! - Timers run on a [`Scheduler`] against a [`Clock`], so tests drive time
//!   with [`ManualClock`]
//! - Nothing blocks: callers poll input with [`ToastRegion::time_until_next`]
//!   as the timeout and call `tick`
//!
//! [`ToastRegion::time_until_next`]: toast::ToastRegion::time_until_next

mod accessibility;
mod alert;
mod badge;
mod button;
mod callout;
mod clock;
mod dialog;
mod error;
mod icon;
mod input;
mod loading;
mod scheduler;
mod text;
mod tooltip;

pub mod table;
pub mod toast;

pub use accessibility::{describe, Accessible};
pub use alert::{Alert, AlertState};
pub use badge::{Badge, MAX_COUNT};
pub use button::Button;
pub use callout::CLOSE_GLYPH;
pub use clock::{Clock, ManualClock, SystemClock};
pub use dialog::{
    ConfirmDialog, DialogButton, DialogOutcome, DialogState, DEFAULT_CANCEL_LABEL,
    DEFAULT_CONFIRM_LABEL,
};
pub use error::{ToastError, ToastResult};
pub use icon::{Icon, IconName};
pub use input::{Input, InputEvent, InputState, MASK_GLYPH};
pub use loading::{Loading, DEFAULT_MESSAGE};
pub use scheduler::{Due, Scheduler, TimerId};
pub use text::{display_width, truncate_with_ellipsis, wrap};
pub use tooltip::{Tooltip, TooltipState};
