//! Error types for timestamp formatting

use thiserror::Error;

/// Errors raised while rendering a timestamp into a caller buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The buffer can't hold the formatted text and its terminator
    #[error("Buffer too small: need {required} bytes, got {capacity}")]
    BufferTooSmall {
        /// Bytes needed, terminator included
        required: usize,
        /// Bytes the caller provided
        capacity: usize,
    },

    /// The year doesn't fit the four-digit layout
    #[error("Year {0} cannot be rendered as four digits")]
    YearOutOfRange(i32),
}

/// Result type alias for timestamp formatting
pub type Result<T> = std::result::Result<T, FormatError>;
