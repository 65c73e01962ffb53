//! Cached shape lookup by type name

use std::collections::HashSet;

use dashmap::DashMap;
use tracing::debug;

use crate::analyzer::analyze_source;
use crate::error::{Result, ShapeError};
use crate::{ShapeConfig, StructShape};

/// Registry of analyzed type shapes, keyed by type path.
///
/// Lets callers that only know a type by name ask for its capability
/// without re-analyzing source. The answer is computed once at
/// registration and then read back as a cached boolean.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    config: ShapeConfig,
    shapes: DashMap<String, StructShape>,
}

impl ShapeRegistry {
    /// Create an empty registry using the default conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with a custom configuration.
    pub fn with_config(config: ShapeConfig) -> Self {
        Self {
            config,
            shapes: DashMap::new(),
        }
    }

    /// The configuration used by [`register_source`](Self::register_source).
    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    /// Register a shape, replacing any earlier one with the same type path.
    pub fn register(&self, shape: StructShape) {
        self.shapes.insert(shape.type_name.clone(), shape);
    }

    /// Register a batch of shapes taken from one source.
    ///
    /// Returns the number of shapes registered. Earlier registrations with
    /// the same paths are replaced.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateType` if two shapes in the batch share a type
    /// path; nothing is registered in that case.
    pub fn register_all(&self, shapes: Vec<StructShape>) -> Result<usize> {
        let mut seen = HashSet::new();
        for shape in &shapes {
            if !seen.insert(shape.type_name.as_str()) {
                return Err(ShapeError::DuplicateType {
                    type_name: shape.type_name.clone(),
                });
            }
        }

        let count = shapes.len();
        for shape in shapes {
            self.register(shape);
        }
        debug!(count, total = self.shapes.len(), "registered shapes");
        Ok(count)
    }

    /// Analyze source text and register every type it declares.
    ///
    /// Returns the number of shapes registered.
    ///
    /// # Errors
    ///
    /// Returns the analyzer's error or `DuplicateType`; nothing is
    /// registered in either case.
    pub fn register_source(&self, source: &str) -> Result<usize> {
        let shapes = analyze_source(source, &self.config)?;
        self.register_all(shapes)
    }

    /// Get a copy of a registered shape.
    pub fn get(&self, type_name: &str) -> Option<StructShape> {
        self.shapes.get(type_name).map(|entry| entry.value().clone())
    }

    /// Whether a registered type carries the name capability.
    ///
    /// Returns `None` for types that were never registered.
    pub fn has_name_field(&self, type_name: &str) -> Option<bool> {
        self.shapes.get(type_name).map(|entry| entry.has_name)
    }

    /// Registered type paths, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.shapes.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of registered shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether no shapes are registered.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
