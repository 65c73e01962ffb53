//! # shapeprobe-derive
//!
//! `#[derive(NameCapability)]` for the `shapeprobe` crate.
//!
//! The derive inspects the type's declared fields with the shared
//! predicate from `shapeprobe-syntax` and emits an implementation of
//! `shapeprobe::NameCapability` whose `HAS_NAME` constant is fixed at
//! compile time.
//!
//! ```ignore
//! use shapeprobe::NameCapability;
//!
//! #[derive(NameCapability)]
//! struct Person {
//!     age: i32,
//!     name: String,
//! }
//!
//! #[derive(NameCapability)]
//! struct City {
//!     #[shape(name)]
//!     label: Label, // any `ToString` type
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, DeriveInput};

use shapeprobe_syntax::{name_field, ShapeConfig};

/// Derive `shapeprobe::NameCapability` from the type's declared fields.
///
/// A struct has the capability when it declares a field named `name` (or
/// `name_`) of a string-convertible type, or marks one field with
/// `#[shape(name)]`. `#[shape(skip)]` excludes a field. Enums and unions
/// never have the capability.
#[proc_macro_derive(NameCapability, attributes(shape))]
pub fn derive_name_capability(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let config = ShapeConfig::default();
    let ident = &input.ident;
    let mut generics = input.generics.clone();

    let (has_name, body) = match name_field(input, &config)? {
        Some(field) => {
            let member = &field.ident;
            let ty = &field.ty;
            // Explicit fields of custom types surface a missing `ToString` here.
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#ty: ::std::string::ToString));
            (
                true,
                quote! {
                    ::std::option::Option::Some(::std::string::ToString::to_string(&self.#member))
                },
            )
        }
        None => (false, quote! { ::std::option::Option::None }),
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::shapeprobe::NameCapability for #ident #ty_generics #where_clause {
            const HAS_NAME: bool = #has_name;

            fn name_text(&self) -> ::std::option::Option<::std::string::String> {
                #body
            }
        }
    })
}
