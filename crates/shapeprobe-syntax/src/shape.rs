//! Structural shapes of type definitions
//!
//! A shape records the declared fields of a struct, enum or union and
//! whether the type carries the name capability: a field conventionally
//! named "name" whose type converts to a string.
//!
//! The answer depends only on the definition's syntax, never on any
//! instance of the type, so the same input always yields the same shape.

use indexmap::IndexMap;
use quote::ToTokens;
use serde::Serialize;
use syn::ext::IdentExt;

use crate::ShapeConfig;

/// Name of the helper attribute understood on fields.
pub const SHAPE_ATTR: &str = "shape";

// ═══════════════════════════════════════════════════════════════════════
// Shape Types
// ═══════════════════════════════════════════════════════════════════════

/// The kind of type definition a shape was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// `struct Person { name: String }`
    Named,
    /// `struct Meters(f64);`
    Tuple,
    /// `struct Marker;`
    Unit,
    /// `enum Shape { .. }`
    Enum,
    /// `union Bits { .. }`
    Union,
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldShape {
    /// Field identifier (unraw), or its index for tuple structs
    pub name: String,

    /// The field type as written
    pub ty: String,

    /// Whether the field type is string-convertible
    pub string_like: bool,
}

/// The structural shape of one type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructShape {
    /// Type name, prefixed with its inline module path when nested
    pub type_name: String,

    /// What kind of definition this is
    pub kind: ShapeKind,

    /// Declared fields in definition order.
    /// For tuple structs, keys are "0", "1", "2", etc.
    pub fields: IndexMap<String, FieldShape>,

    /// Whether the type carries the name capability
    pub has_name: bool,

    /// The field that provides the capability, if any
    pub name_field: Option<String>,
}

impl StructShape {
    /// Compute the shape of a derive input (or any item converted into one).
    ///
    /// # Errors
    ///
    /// Returns an error for malformed `#[shape(..)]` field attributes.
    pub fn from_derive_input(input: &syn::DeriveInput, config: &ShapeConfig) -> syn::Result<Self> {
        let provider = name_field(input, config)?.and_then(|field| field.ident.as_ref());
        Ok(Self::build(input, config, provider))
    }

    /// Compute the shape of a derive input, recording it as lacking the
    /// name capability whatever its fields say.
    ///
    /// Used when the `#[shape(..)]` attributes can't be interpreted.
    pub fn without_name(input: &syn::DeriveInput, config: &ShapeConfig) -> Self {
        Self::build(input, config, None)
    }

    fn build(input: &syn::DeriveInput, config: &ShapeConfig, provider: Option<&syn::Ident>) -> Self {
        let (kind, fields) = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => (ShapeKind::Named, Some(&named.named)),
                syn::Fields::Unnamed(unnamed) => (ShapeKind::Tuple, Some(&unnamed.unnamed)),
                syn::Fields::Unit => (ShapeKind::Unit, None),
            },
            syn::Data::Enum(_) => (ShapeKind::Enum, None),
            syn::Data::Union(data) => (ShapeKind::Union, Some(&data.fields.named)),
        };

        let fields = fields
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(index, field)| {
                let name = field_key(field, index);
                let shape = FieldShape {
                    name: name.clone(),
                    ty: field.ty.to_token_stream().to_string(),
                    string_like: is_string_like(&field.ty, config),
                };
                (name, shape)
            })
            .collect();

        Self {
            type_name: input.ident.unraw().to_string(),
            kind,
            fields,
            has_name: provider.is_some(),
            name_field: provider.map(|ident| ident.unraw().to_string()),
        }
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&FieldShape> {
        self.fields.get(name)
    }
}

fn field_key(field: &syn::Field, index: usize) -> String {
    match &field.ident {
        Some(ident) => ident.unraw().to_string(),
        None => index.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Field Attributes
// ═══════════════════════════════════════════════════════════════════════

/// Parsed `#[shape(..)]` options on a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    /// `#[shape(name)]`: this field is the name, whatever it is called
    pub name: bool,

    /// `#[shape(skip)]`: never treat this field as the name
    pub skip: bool,
}

impl FieldAttrs {
    /// Parse the `#[shape(..)]` attributes of a field.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options or for `name` combined with `skip`.
    pub fn from_field(field: &syn::Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident(SHAPE_ATTR) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    attrs.name = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported shape option, expected `name` or `skip`"))
                }
            })?;
        }

        if attrs.name && attrs.skip {
            return Err(syn::Error::new_spanned(
                field,
                "a field cannot be both `shape(name)` and `shape(skip)`",
            ));
        }

        Ok(attrs)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Predicates
// ═══════════════════════════════════════════════════════════════════════

/// Find the field that gives a type the name capability.
///
/// Only structs with named fields can have one. A field marked
/// `#[shape(name)]` wins; otherwise the first non-skipped field with a
/// conventional name and a string-convertible type is chosen.
///
/// # Errors
///
/// Returns an error for malformed attributes or for more than one
/// `#[shape(name)]` field.
pub fn name_field<'a>(
    input: &'a syn::DeriveInput,
    config: &ShapeConfig,
) -> syn::Result<Option<&'a syn::Field>> {
    let fields = match &input.data {
        syn::Data::Struct(syn::DataStruct {
            fields: syn::Fields::Named(named),
            ..
        }) => &named.named,
        _ => return Ok(None),
    };

    let mut explicit: Option<&syn::Field> = None;
    let mut conventional: Option<&syn::Field> = None;

    for field in fields {
        let attrs = FieldAttrs::from_field(field)?;
        if attrs.name {
            if explicit.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "only one field may be marked `shape(name)`",
                ));
            }
            explicit = Some(field);
        } else if !attrs.skip && conventional.is_none() && is_conventional_name_field(field, config)
        {
            conventional = Some(field);
        }
    }

    Ok(explicit.or(conventional))
}

/// Check whether a field is named by convention and has a string-convertible type.
pub fn is_conventional_name_field(field: &syn::Field, config: &ShapeConfig) -> bool {
    field
        .ident
        .as_ref()
        .is_some_and(|ident| config.is_name_field(&ident.unraw().to_string()))
        && is_string_like(&field.ty, config)
}

/// Check whether a type, as written, converts to a string.
///
/// # Examples
///
/// - `String`, `&str`, `&'a mut str` → true
/// - `Box<str>`, `Arc<String>`, `Cow<'a, str>` → true
/// - `i32`, `Vec<String>`, `Option<String>` → false
pub fn is_string_like(ty: &syn::Type, config: &ShapeConfig) -> bool {
    match ty {
        syn::Type::Reference(reference) => is_string_like(&reference.elem, config),

        // Parenthesized / invisible groups - just unwrap
        syn::Type::Paren(paren) => is_string_like(&paren.elem, config),
        syn::Type::Group(group) => is_string_like(&group.elem, config),

        syn::Type::Path(path) if path.qself.is_none() => {
            let Some(last) = path.path.segments.last() else {
                return false;
            };
            let ident = last.ident.to_string();

            match &last.arguments {
                syn::PathArguments::None => config.is_string_type(&ident),
                syn::PathArguments::AngleBracketed(args) if config.is_string_wrapper(&ident) => args
                    .args
                    .iter()
                    .find_map(|arg| match arg {
                        syn::GenericArgument::Type(inner) => Some(inner),
                        _ => None,
                    })
                    .is_some_and(|inner| is_string_like(inner, config)),
                _ => false,
            }
        }

        _ => false,
    }
}
