//! Testing utilities for terminal components.
//!
//! - [`TestTerminal`]: a headless ratatui terminal with text queries
//! - [`InputSequence`]: scripted key, mouse and clock-advance steps

pub mod input;
pub mod terminal;

pub use input::{InputSequence, Step};
pub use terminal::TestTerminal;

/// Error types for testing operations.
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    #[error("text not found on screen: {0:?}")]
    NotFound(String),
}

/// Result type for testing operations.
pub type TestResult<T> = Result<T, TestError>;
