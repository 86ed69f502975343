use crate::view::ProductRow;
use dioxus::prelude::*;
use pcat_domain::constants::{NO_MATCHING_MESSAGE, hooks};

const COLUMNS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// The filtered products, or the empty-state message when nothing matches.
#[component]
pub fn ProductTable(rows: Vec<ProductRow>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { "data-cy": hooks::NO_MATCHING_MESSAGE, {NO_MATCHING_MESSAGE} }
        };
    }

    rsx! {
        table {
            "data-cy": hooks::PRODUCT_TABLE,
            class: "table is-striped is-narrow is-fullwidth",
            thead {
                tr {
                    for column in COLUMNS {
                        th {
                            span { class: "is-flex is-flex-wrap-nowrap", {column} }
                        }
                    }
                }
            }
            tbody {
                for row in rows {
                    tr { key: "{row.id}", "data-cy": hooks::PRODUCT,
                        td { class: "has-text-weight-bold", "data-cy": hooks::PRODUCT_ID, "{row.id}" }
                        td { "data-cy": hooks::PRODUCT_NAME, "{row.name}" }
                        td { "data-cy": hooks::PRODUCT_CATEGORY, "{row.category}" }
                        td {
                            "data-cy": hooks::PRODUCT_USER,
                            class: row.user_class.unwrap_or_default(),
                            "{row.user}"
                        }
                    }
                }
            }
        }
    }
}
