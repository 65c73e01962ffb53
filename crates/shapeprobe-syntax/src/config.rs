//! Shape analysis configuration

/// Field identifiers that carry the name capability by default.
///
/// `name_` covers the trailing-underscore member convention.
pub const DEFAULT_NAME_FIELDS: &[&str] = &["name", "name_"];

/// Type names that are string-convertible on their own.
pub const DEFAULT_STRING_TYPES: &[&str] = &["String", "str"];

/// Pointer-like wrappers that are string-convertible when their
/// first type argument is.
pub const DEFAULT_STRING_WRAPPERS: &[&str] = &["Box", "Rc", "Arc", "Cow"];

/// Configuration for structural shape analysis.
///
/// Controls which field identifiers count as "name" fields and which
/// field types count as convertible to a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeConfig {
    /// Accepted name-field identifiers (raw identifiers are compared unraw)
    pub name_fields: Vec<String>,

    /// Type names accepted as string-convertible
    pub string_types: Vec<String>,

    /// Wrapper types that forward string convertibility from their argument
    pub string_wrappers: Vec<String>,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            name_fields: to_owned_list(DEFAULT_NAME_FIELDS),
            string_types: to_owned_list(DEFAULT_STRING_TYPES),
            string_wrappers: to_owned_list(DEFAULT_STRING_WRAPPERS),
        }
    }
}

impl ShapeConfig {
    /// Create a configuration with the default conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an additional name-field identifier (builder pattern).
    pub fn with_name_field(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        if !self.name_fields.contains(&field) {
            self.name_fields.push(field);
        }
        self
    }

    /// Accept an additional string-convertible type name (builder pattern).
    pub fn with_string_type(mut self, ty: impl Into<String>) -> Self {
        let ty = ty.into();
        if !self.string_types.contains(&ty) {
            self.string_types.push(ty);
        }
        self
    }

    /// Check whether an identifier names a "name" field.
    pub fn is_name_field(&self, ident: &str) -> bool {
        self.name_fields.iter().any(|f| f == ident)
    }

    /// Check whether a bare type name is string-convertible.
    pub fn is_string_type(&self, ty: &str) -> bool {
        self.string_types.iter().any(|t| t == ty)
    }

    /// Check whether a wrapper forwards string convertibility.
    pub fn is_string_wrapper(&self, ty: &str) -> bool {
        self.string_wrappers.iter().any(|t| t == ty)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
