//! Source analysis: the name capability at static-analysis time
//!
//! Parses Rust source with `syn` and computes a [`StructShape`] for every
//! struct, enum and union it declares. Each type is named by the path of
//! scopes enclosing it:
//!
//! - inline modules: `geometry::Point`
//! - function bodies: `main::Local`
//! - methods: `Parser::parse::Token` (impl self type, then method)
//! - trait default bodies: `Render::draw::Frame`
//!
//! Only parsing can fail. A type whose `#[shape(..)]` attributes can't be
//! interpreted is logged and recorded without the name capability.

use std::path::Path;

use quote::ToTokens;
use syn::ext::IdentExt;
use syn::visit::{self, Visit};
use tracing::{debug, trace, warn};

use crate::error::{Result, ShapeError};
use crate::{ShapeConfig, StructShape};

/// Analyze Rust source text.
///
/// # Errors
///
/// Returns `Parse` if the source is not a valid Rust file.
pub fn analyze_source(source: &str, config: &ShapeConfig) -> Result<Vec<StructShape>> {
    let file = syn::parse_file(source)?;
    Ok(analyze_items(&file.items, config))
}

/// Analyze a Rust source file on disk.
///
/// # Errors
///
/// Returns `Io` if the file can't be read, otherwise as [`analyze_source`].
pub fn analyze_file(path: &Path, config: &ShapeConfig) -> Result<Vec<StructShape>> {
    debug!(path = %path.display(), "analyzing source file");
    let source = std::fs::read_to_string(path).map_err(|source| ShapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    analyze_source(&source, config)
}

/// Analyze already-parsed items.
pub fn analyze_items(items: &[syn::Item], config: &ShapeConfig) -> Vec<StructShape> {
    let mut collector = ShapeCollector {
        config,
        scope: Vec::new(),
        shapes: Vec::new(),
    };

    for item in items {
        collector.visit_item(item);
    }

    debug!(count = collector.shapes.len(), "collected type shapes");
    collector.shapes
}

// ═══════════════════════════════════════════════════════════════════════
// Visitor
// ═══════════════════════════════════════════════════════════════════════

struct ShapeCollector<'c> {
    config: &'c ShapeConfig,
    /// Enclosing modules, types, traits and functions, outermost first
    scope: Vec<String>,
    shapes: Vec<StructShape>,
}

impl ShapeCollector<'_> {
    fn record(&mut self, input: syn::DeriveInput) {
        let mut shape = match StructShape::from_derive_input(&input, self.config) {
            Ok(shape) => shape,
            Err(err) => {
                warn!(
                    type_name = %input.ident,
                    error = %err,
                    "unreadable shape attribute, recording type without a name"
                );
                StructShape::without_name(&input, self.config)
            }
        };

        if !self.scope.is_empty() {
            shape.type_name = format!("{}::{}", self.scope.join("::"), shape.type_name);
        }
        trace!(type_name = %shape.type_name, has_name = shape.has_name, "shape");
        self.shapes.push(shape);
    }

    fn scoped(&mut self, segments: &[String], walk: impl FnOnce(&mut Self)) {
        self.scope.extend_from_slice(segments);
        walk(self);
        self.scope.truncate(self.scope.len() - segments.len());
    }
}

/// Scope segment for an impl block's self type.
fn self_type_segment(ty: &syn::Type) -> String {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => match path.path.segments.last() {
            Some(last) => last.ident.unraw().to_string(),
            None => ty.to_token_stream().to_string(),
        },
        _ => ty.to_token_stream().to_string(),
    }
}

impl<'ast> Visit<'ast> for ShapeCollector<'_> {
    fn visit_item_struct(&mut self, item: &'ast syn::ItemStruct) {
        self.record(item.clone().into());
        visit::visit_item_struct(self, item);
    }

    fn visit_item_enum(&mut self, item: &'ast syn::ItemEnum) {
        self.record(item.clone().into());
        visit::visit_item_enum(self, item);
    }

    fn visit_item_union(&mut self, item: &'ast syn::ItemUnion) {
        self.record(item.clone().into());
        visit::visit_item_union(self, item);
    }

    fn visit_item_mod(&mut self, item: &'ast syn::ItemMod) {
        let segment = item.ident.unraw().to_string();
        self.scoped(&[segment], |this| visit::visit_item_mod(this, item));
    }

    fn visit_item_fn(&mut self, item: &'ast syn::ItemFn) {
        let segment = item.sig.ident.unraw().to_string();
        self.scoped(&[segment], |this| visit::visit_item_fn(this, item));
    }

    fn visit_item_impl(&mut self, item: &'ast syn::ItemImpl) {
        let segment = self_type_segment(&item.self_ty);
        self.scoped(&[segment], |this| visit::visit_item_impl(this, item));
    }

    fn visit_impl_item_fn(&mut self, item: &'ast syn::ImplItemFn) {
        let segment = item.sig.ident.unraw().to_string();
        self.scoped(&[segment], |this| visit::visit_impl_item_fn(this, item));
    }

    fn visit_item_trait(&mut self, item: &'ast syn::ItemTrait) {
        let segment = item.ident.unraw().to_string();
        self.scoped(&[segment], |this| visit::visit_item_trait(this, item));
    }

    fn visit_trait_item_fn(&mut self, item: &'ast syn::TraitItemFn) {
        let segment = item.sig.ident.unraw().to_string();
        self.scoped(&[segment], |this| visit::visit_trait_item_fn(this, item));
    }
}
