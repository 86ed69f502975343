use crate::state::ViewState;
use crate::view::user_chips;
use dioxus::prelude::*;
use pcat_domain::constants::{ALL_LABEL, RESET_ALL_LABEL, SEARCH_PLACEHOLDER, hooks};
use pcat_domain::models::{Category, User};
use tracing::debug;

#[component]
pub fn FilterPanel(mut state: Signal<ViewState>, users: Vec<User>) -> Element {
    let current = state.read().clone();
    let chips = user_chips(&users, &current.selected_user_name);
    let all_class = if current.is_all_selected() { "is-active" } else { "" };

    rsx! {
        nav { class: "panel",
            p { class: "panel-heading", "Filters" }

            p { class: "panel-tabs has-text-weight-bold",
                a {
                    "data-cy": hooks::FILTER_ALL_USERS,
                    href: "#/",
                    class: all_class,
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        state.write().select_user(String::new());
                    },
                    {ALL_LABEL}
                }

                for chip in chips {
                    a {
                        key: "{chip.name}",
                        "data-cy": hooks::FILTER_USER,
                        href: "#/",
                        class: chip.class(),
                        onclick: {
                            let name = chip.name.clone();
                            move |evt: MouseEvent| {
                                evt.prevent_default();
                                debug!(user = %name, "Owner filter selected");
                                state.write().select_user(name.clone());
                            }
                        },
                        "{chip.name}"
                    }
                }
            }

            div { class: "panel-block",
                p { class: "control has-icons-left has-icons-right",
                    input {
                        "data-cy": hooks::SEARCH_FIELD,
                        r#type: "text",
                        class: "input",
                        placeholder: SEARCH_PLACEHOLDER,
                        value: "{current.search_query}",
                        oninput: move |evt: FormEvent| state.write().set_query(evt.value()),
                    }

                    span { class: "icon is-left",
                        i { class: "fas fa-search", "aria-hidden": "true" }
                    }

                    if current.shows_clear_button() {
                        span { class: "icon is-right",
                            button {
                                "data-cy": hooks::CLEAR_BUTTON,
                                "aria-label": "Clear input",
                                r#type: "button",
                                class: "delete",
                                onclick: move |_| state.write().clear_query(),
                            }
                        }
                    }
                }
            }

            div { class: "panel-block",
                a {
                    "data-cy": hooks::RESET_ALL_BUTTON,
                    href: "#/",
                    class: "button is-link is-outlined is-fullwidth",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        debug!("All filters reset");
                        state.write().reset_all();
                    },
                    {RESET_ALL_LABEL}
                }
            }
        }
    }
}

/// Category buttons. They are rendered but do not filter.
#[component]
pub fn CategoryBar(categories: Vec<Category>) -> Element {
    rsx! {
        div { class: "panel-block is-flex-wrap-wrap",
            a {
                "data-cy": hooks::ALL_CATEGORIES,
                href: "#/",
                class: "button is-success mr-6 is-outlined",
                onclick: move |evt: MouseEvent| evt.prevent_default(),
                {ALL_LABEL}
            }

            for category in categories {
                a {
                    key: "{category.id}",
                    "data-cy": hooks::CATEGORY,
                    href: "#/",
                    class: "button mr-2 my-1 is-info",
                    onclick: move |evt: MouseEvent| evt.prevent_default(),
                    "{category.title}"
                }
            }
        }
    }
}
