//! # shapeprobe-syntax
//!
//! Structural shape analysis for Rust type definitions over the `syn` AST.
//!
//! The central question is the *name capability*: does a type declare a
//! field conventionally named "name" whose type converts to a string?
//! The answer depends only on how the type is written, so it can be
//! computed from syntax alone:
//!
//! - at compile time, by `shapeprobe-derive`, from a `DeriveInput`
//! - at static-analysis time, by [`analyze_source`], from source text
//! - by name, through the cached [`ShapeRegistry`]
//!
//! Both paths share the same predicate ([`is_string_like`], [`name_field`])
//! and the same [`ShapeConfig`] conventions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod registry;
pub mod shape;

// Re-export main types
pub use analyzer::{analyze_file, analyze_items, analyze_source};
pub use config::ShapeConfig;
pub use error::{Result, ShapeError};
pub use registry::ShapeRegistry;
pub use shape::{
    is_conventional_name_field, is_string_like, name_field, FieldAttrs, FieldShape, ShapeKind,
    StructShape, SHAPE_ATTR,
};
