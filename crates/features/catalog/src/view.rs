//! Render-ready rows and chips, kept free of any UI framework.

use pcat_domain::constants::MISSING_VALUE;
use pcat_domain::models::{Category, EnrichedProduct, Sex, User};

/// CSS class of a user name for the given sex.
#[must_use]
pub const fn sex_class(sex: Option<Sex>) -> Option<&'static str> {
    match sex {
        Some(Sex::Male) => Some("has-text-link"),
        Some(Sex::Female) => Some("has-text-danger"),
        None => None,
    }
}

/// `"{icon} - {title}"`, with each part rendered as `undefined` when absent.
#[must_use]
pub fn category_label(category: Option<&Category>) -> String {
    let (icon, title) =
        category.map_or((MISSING_VALUE, MISSING_VALUE), |c| (c.icon.as_str(), c.title.as_str()));
    format!("{icon} - {title}")
}

/// One table row of the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Empty when the owner is absent.
    pub user: String,
    pub user_class: Option<&'static str>,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        Self {
            id: product.id().0,
            name: product.name().to_owned(),
            category: category_label(product.category.as_ref()),
            user: product.user_name().unwrap_or_default().to_owned(),
            user_class: sex_class(product.user.as_ref().map(|u| u.sex)),
        }
    }
}

/// Rows for a filtered product list, order preserved.
#[must_use]
pub fn rows(products: &[EnrichedProduct]) -> Vec<ProductRow> {
    products.iter().map(ProductRow::from).collect()
}

/// A selectable owner filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChip {
    pub name: String,
    pub active: bool,
}

impl UserChip {
    #[must_use]
    pub const fn class(&self) -> &'static str {
        if self.active { "is-active" } else { "" }
    }
}

/// One chip per user, in source order, flagging the current selection.
#[must_use]
pub fn user_chips(users: &[User], selected_user_name: &str) -> Vec<UserChip> {
    users
        .iter()
        .map(|u| UserChip { name: u.name.clone(), active: u.name == selected_user_name })
        .collect()
}
