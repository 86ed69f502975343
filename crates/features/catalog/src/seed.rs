//! Seed data embedded at build time.

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogErrorExt};
use serde::de::DeserializeOwned;

const USERS: &str = include_str!("../data/users.json");
const CATEGORIES: &str = include_str!("../data/categories.json");
const PRODUCTS: &str = include_str!("../data/products.json");

impl Catalog {
    /// Decodes the embedded seed lists.
    ///
    /// # Errors
    /// Returns [`CatalogError::Json`] if a seed file is malformed and
    /// [`CatalogError::Data`] if it repeats an id.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json(USERS, CATEGORIES, PRODUCTS)
    }

    /// Decodes a catalog from three JSON arrays (camelCase keys).
    ///
    /// # Errors
    /// Same as [`Self::seeded`].
    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, CatalogError> {
        Self::from_parts(
            decode(users, "users")?,
            decode(categories, "categories")?,
            decode(products, "products")?,
        )
    }
}

fn decode<T: DeserializeOwned>(raw: &str, list: &'static str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(raw).context(list)
}
