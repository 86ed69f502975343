use crate::error::CatalogError;
use fxhash::FxHashSet;
use pcat_domain::models::{
    Category, CategoryId, EnrichedProduct, Product, User, UserId,
};
use std::fmt::Display;
use std::hash::Hash;
use tracing::instrument;

/// Immutable catalog state: the three source lists, shared behind an `Arc`.
#[pcat_derive::pcat_slice]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from source lists, rejecting duplicate ids within a list.
    ///
    /// Dangling foreign keys are accepted; they surface as absent joins.
    ///
    /// # Errors
    /// Returns [`CatalogError::Data`] naming the first duplicated id.
    pub fn from_parts(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, CatalogError> {
        ensure_unique("user", users.iter().map(|u| u.id))?;
        ensure_unique("category", categories.iter().map(|c| c.id))?;
        ensure_unique("product", products.iter().map(|p| p.id))?;

        Ok(Self::new(CatalogInner { users, categories, products }))
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First category with the given id.
    #[must_use]
    pub fn find_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// First user with the given id.
    #[must_use]
    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Joins each product with its category and that category's owner.
    ///
    /// One output per input, in input order. The owner is only looked up when the
    /// category resolves.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(products = products.len()))]
    pub fn enrich(&self, products: &[Product]) -> Vec<EnrichedProduct> {
        products
            .iter()
            .map(|product| {
                let category = self.find_category(product.category_id).cloned();
                let user =
                    category.as_ref().and_then(|c| self.find_user(c.owner_id)).cloned();
                EnrichedProduct { product: product.clone(), category, user }
            })
            .collect()
    }

    /// [`Self::enrich`] over the catalog's own products.
    #[must_use]
    pub fn enriched(&self) -> Vec<EnrichedProduct> {
        self.enrich(&self.products)
    }
}

fn ensure_unique<I>(kind: &'static str, ids: impl IntoIterator<Item = I>) -> Result<(), CatalogError>
where
    I: Hash + Eq + Display + Copy,
{
    let mut seen = FxHashSet::default();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::Data {
                message: format!("duplicate {kind} id {id}").into(),
                context: None,
            });
        }
    }
    Ok(())
}
