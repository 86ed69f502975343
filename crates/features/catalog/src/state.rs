//! The two independent filter inputs of the catalog view.

use crate::catalog::Catalog;
use crate::filter::apply_filters;
use pcat_domain::models::EnrichedProduct;

/// Current filter parameters. Both default to empty, which filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected_user_name: String,
    pub search_query: String,
}

impl ViewState {
    /// Selects an owner by name; the empty string is the "All" choice.
    pub fn select_user(&mut self, name: impl Into<String>) {
        self.selected_user_name = name.into();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub fn clear_query(&mut self) {
        self.search_query.clear();
    }

    pub fn reset_all(&mut self) {
        self.selected_user_name.clear();
        self.search_query.clear();
    }

    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        self.selected_user_name.is_empty()
    }

    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_user_name == name
    }

    /// The clear affordance is only offered while there is something to clear.
    #[must_use]
    pub fn shows_clear_button(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// Filters an already enriched list with the current parameters.
    #[must_use]
    pub fn filter_products(&self, enriched: &[EnrichedProduct]) -> Vec<EnrichedProduct> {
        apply_filters(enriched, &self.selected_user_name, &self.search_query)
    }

    /// Recomputes the visible products from the catalog's source lists.
    #[must_use]
    pub fn visible_products(&self, catalog: &Catalog) -> Vec<EnrichedProduct> {
        self.filter_products(&catalog.enriched())
    }
}
