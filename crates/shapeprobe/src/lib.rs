//! # shapeprobe
//!
//! Compile-time capability checks and a C-callable timestamp formatter.
//!
//! Two independent pieces:
//!
//! - **Name capability**: [`NameCapability`] reports, as an associated
//!   constant, whether a type exposes a string-convertible field named
//!   "name". `#[derive(NameCapability)]` computes it from the declared
//!   fields; [`has_name_field`] and [`assert_has_name!`] make it usable in
//!   `const` contexts and build-time assertions.
//! - **Timestamp formatting**: [`format_now`] writes the local time as
//!   `YYYY-MM-DD HH:MM:SS` plus a NUL terminator into a caller buffer,
//!   failing with [`FormatError::BufferTooSmall`] instead of overflowing.
//!   The [`ffi`] module exposes the same contract over the C ABI.
//!
//! Source-level analysis of the same capability lives in
//! [`shapeprobe_syntax`], re-exported here as [`syntax`].

#![warn(missing_docs)]
#![warn(clippy::all)]

// Lets `#[derive(NameCapability)]` name `::shapeprobe` from inside this crate.
extern crate self as shapeprobe;

pub mod capability;
pub mod error;
pub mod ffi;
pub mod timestamp;

pub use shapeprobe_syntax as syntax;

// Re-export main types
pub use capability::{has_name_field, label_or, name_of, NameCapability};
pub use error::{FormatError, Result};
pub use shapeprobe_derive::NameCapability;
pub use timestamp::{format_now, Timestamp, TIMESTAMP_CAPACITY, TIMESTAMP_LEN};

/// shapeprobe version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
