//! Product catalog feature slice.
//!
//! Joins static products with their category and owning user, then narrows the joined
//! list by the selected owner and a free-text search. Every operation is total: foreign
//! keys that do not resolve become `None` and an empty result is a normal outcome.
//!
//! The `client` feature adds the Dioxus components in [`ui`].

mod catalog;
mod error;
pub mod filter;
mod seed;
pub mod state;
#[cfg(feature = "client")]
pub mod ui;
pub mod view;

pub use crate::catalog::{Catalog, CatalogInner};
pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::filter::{FilterPipeline, OwnerFilter, ProductFilter, SearchFilter, apply_filters};
pub use crate::state::ViewState;
pub use pcat_domain::models::{
    Category, CategoryId, EnrichedProduct, Product, ProductId, Sex, User, UserId,
};

use pcat_domain::registry::InitializedSlice;

/// Initialize the catalog feature from the embedded seed data.
///
/// # Errors
/// Returns [`CatalogError`] if the seed cannot be decoded or contains duplicate ids.
pub fn init() -> Result<InitializedSlice, CatalogError> {
    let catalog = Catalog::seeded()?;

    tracing::info!(
        users = catalog.users().len(),
        categories = catalog.categories().len(),
        products = catalog.products().len(),
        "Catalog slice initialized"
    );

    Ok(InitializedSlice::new(catalog))
}
