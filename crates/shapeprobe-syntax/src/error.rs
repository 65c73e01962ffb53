//! Error types for shape analysis

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while analyzing Rust source for type shapes.
///
/// The predicate itself never fails; only getting hold of the
/// source can.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// Source text is not valid Rust
    #[error("Parse error: {message}")]
    Parse {
        /// Message from the syn parser
        message: String,
    },

    /// Two types in one batch share the same type path
    #[error("Duplicate type path: {type_name}")]
    DuplicateType {
        /// The path declared more than once
        type_name: String,
    },

    /// Source file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl From<syn::Error> for ShapeError {
    fn from(err: syn::Error) -> Self {
        ShapeError::Parse {
            message: err.to_string(),
        }
    }
}

/// Result type alias for shape analysis
pub type Result<T> = std::result::Result<T, ShapeError>;
