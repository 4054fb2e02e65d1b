//! Dispatcher error types

use thiserror::Error;

/// Errors raised while registering event handlers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A handler was registered with an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No custom handler is registered under this name
    #[error("Custom event '{0}' not found")]
    NotFound(String),
}

/// Result type for dispatcher operations
pub type Result<T> = std::result::Result<T, DispatchError>;
