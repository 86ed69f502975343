//! Dioxus components for the catalog page.
//!
//! [`CatalogPage`] expects a [`Catalog`] in context (see `LaunchBuilder::with_context`).

mod panel;
mod table;

pub use panel::{CategoryBar, FilterPanel};
pub use table::ProductTable;

use crate::catalog::Catalog;
use crate::state::ViewState;
use crate::view;
use dioxus::prelude::*;
use pcat_domain::constants::HEADING;
use std::rc::Rc;

/// Inline stylesheet covering the classes the components use.
pub const STYLESHEET: &str = include_str!("../../assets/catalog.css");

/// Root component: filter panel, category bar and the filtered product table.
#[component]
pub fn CatalogPage() -> Element {
    let catalog = use_context::<Catalog>();
    let state = use_signal(ViewState::default);

    // Source lists never change, so the join runs once per mount.
    let enriched = use_hook(|| Rc::new(catalog.enriched()));
    let visible = use_memo(move || state.read().filter_products(&enriched));
    let rows = view::rows(&visible.read());

    rsx! {
        style { {STYLESHEET} }
        div { class: "section",
            div { class: "container",
                h1 { class: "title", {HEADING} }

                div { class: "block",
                    FilterPanel { state, users: catalog.users().to_vec() }
                }

                CategoryBar { categories: catalog.categories().to_vec() }

                div { class: "box table-container",
                    ProductTable { rows }
                }
            }
        }
    }
}
