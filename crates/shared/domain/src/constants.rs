//! Stable strings shared by the view and its tests.

pub const HEADING: &str = "Product Categories";
pub const ALL_LABEL: &str = "All";
pub const SEARCH_PLACEHOLDER: &str = "Search";
pub const RESET_ALL_LABEL: &str = "Reset all filters";
pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

/// Rendered in place of an absent category's icon or title.
pub const MISSING_VALUE: &str = "undefined";

/// Test-hook identifiers rendered as `data-cy` attributes.
pub mod hooks {
    pub const FILTER_ALL_USERS: &str = "FilterAllUsers";
    pub const FILTER_USER: &str = "FilterUser";
    pub const SEARCH_FIELD: &str = "SearchField";
    pub const CLEAR_BUTTON: &str = "ClearButton";
    pub const RESET_ALL_BUTTON: &str = "ResetAllButton";
    pub const ALL_CATEGORIES: &str = "AllCategories";
    pub const CATEGORY: &str = "Category";
    pub const NO_MATCHING_MESSAGE: &str = "NoMatchingMessage";
    pub const PRODUCT_TABLE: &str = "ProductTable";
    pub const PRODUCT: &str = "Product";
    pub const PRODUCT_ID: &str = "ProductId";
    pub const PRODUCT_NAME: &str = "ProductName";
    pub const PRODUCT_CATEGORY: &str = "ProductCategory";
    pub const PRODUCT_USER: &str = "ProductUser";
}
