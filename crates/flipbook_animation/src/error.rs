//! Animation error types

use thiserror::Error;

/// Errors raised by animations, the manager and scene loading
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A value supplied by the caller is unusable (empty frames, bad duration, negative delta)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An index lies outside the frame list
    #[error("Index {index} out of range for {len} frames")]
    OutOfRange {
        /// Offending index
        index: usize,
        /// Number of frames available
        len: usize,
    },

    /// An animation with this name is already registered
    #[error("Animation '{0}' is already registered")]
    DuplicateKey(String),

    /// No animation is registered under this name
    #[error("Animation '{0}' not found")]
    NotFound(String),

    /// Scene description could not be parsed
    #[error("Scene config error: {0}")]
    Config(String),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;

/// Reject negative and non-finite time deltas
pub(crate) fn validate_elapsed(elapsed: f32) -> Result<()> {
    if !elapsed.is_finite() || elapsed < 0.0 {
        return Err(AnimationError::InvalidArgument(format!(
            "elapsed time must be a finite, non-negative value (got {elapsed})"
        )));
    }
    Ok(())
}
