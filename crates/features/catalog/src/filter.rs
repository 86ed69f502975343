//! Filter predicates over enriched products.
//!
//! Filters never fail. An inactive filter (empty parameter) keeps everything.

use pcat_domain::models::EnrichedProduct;
use tracing::debug;

/// A predicate deciding whether an enriched product stays in the view.
pub trait ProductFilter {
    fn matches(&self, product: &EnrichedProduct) -> bool;

    /// Whether the filter can drop anything at all.
    fn is_active(&self) -> bool {
        true
    }
}

/// Keeps products whose resolved owner name equals the selection exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerFilter<'a> {
    name: &'a str,
}

impl<'a> OwnerFilter<'a> {
    #[must_use]
    pub const fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl ProductFilter for OwnerFilter<'_> {
    fn matches(&self, product: &EnrichedProduct) -> bool {
        !self.is_active() || product.user_name() == Some(self.name)
    }

    fn is_active(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Keeps products whose name contains the query, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self { needle: query.to_lowercase() }
    }
}

impl ProductFilter for SearchFilter {
    fn matches(&self, product: &EnrichedProduct) -> bool {
        product.name().to_lowercase().contains(&self.needle)
    }

    fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }
}

/// Owner filter followed by search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPipeline<'a> {
    owner: OwnerFilter<'a>,
    search: SearchFilter,
}

impl<'a> FilterPipeline<'a> {
    #[must_use]
    pub fn new(selected_user_name: &'a str, query: &str) -> Self {
        Self { owner: OwnerFilter::new(selected_user_name), search: SearchFilter::new(query) }
    }

    /// Surviving products in their original relative order.
    #[must_use]
    pub fn apply(&self, products: &[EnrichedProduct]) -> Vec<EnrichedProduct> {
        let visible: Vec<_> = products
            .iter()
            .filter(|p| self.owner.matches(p))
            .filter(|p| self.search.matches(p))
            .cloned()
            .collect();

        debug!(
            total = products.len(),
            visible = visible.len(),
            owner = self.owner.is_active(),
            search = self.search.is_active(),
            "Filters applied"
        );
        visible
    }
}

/// Applies the owner filter, then the search filter.
///
/// Empty `selected_user_name` and empty `query` return `products` unchanged.
#[must_use]
pub fn apply_filters(
    products: &[EnrichedProduct],
    selected_user_name: &str,
    query: &str,
) -> Vec<EnrichedProduct> {
    FilterPipeline::new(selected_user_name, query).apply(products)
}
