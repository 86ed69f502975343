#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the catalog workspace.
//!
//! * [`macro@pcat_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@pcat_slice`] turns a struct into an immutable, `Arc`-backed feature slice.
//!
//! The examples are `ignore`d because a proc-macro crate cannot use its own macros;
//! see `tests/` for compiled usage.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>`
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping upstream errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]`, together with a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use pcat_derive::pcat_error;
/// use std::borrow::Cow;
///
/// #[pcat_error]
/// pub enum CatalogError {
///     #[error("Seed decode error{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn decode(raw: &str) -> Result<Vec<User>, CatalogError> {
///     serde_json::from_str(raw).context("users.json")
/// }
/// ```
#[proc_macro_attribute]
pub fn pcat_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define an immutable feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// derefs to it and implements `pcat_domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[pcat_derive::pcat_slice]
/// pub struct Catalog {
///     pub users: Vec<User>,
/// }
///
/// let catalog = Catalog::new(CatalogInner { users: Vec::new() });
/// ```
#[proc_macro_attribute]
pub fn pcat_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
