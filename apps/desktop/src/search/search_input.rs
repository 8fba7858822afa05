//! Search input with submit button. Enter or click submits; no debounce.

use dioxus::prelude::*;
use medisearch_core::messages;

use super::icons::{SearchIcon, SpinnerIcon};
use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let search = SEARCH.read();
    let query = search.query.clone();
    let is_loading = search.is_loading();
    drop(search);

    rsx! {
        div {
            class: "search-field",

            span { class: "search-field-icon", SearchIcon { size: 20 } }

            input {
                class: "search-input",
                r#type: "text",
                placeholder: messages::INPUT_PLACEHOLDER,
                value: "{query}",
                autofocus: true,
                oninput: move |e: Event<FormData>| {
                    SEARCH.write().query = e.value();
                },
                onkeydown: move |e: Event<KeyboardData>| {
                    if e.key() == Key::Enter {
                        run_search();
                    }
                },
            }

            button {
                class: "search-button",
                disabled: is_loading,
                onclick: move |_| run_search(),
                if is_loading {
                    SpinnerIcon { size: 20 }
                } else {
                    {messages::SEARCH_BUTTON}
                }
            }
        }
    }
}
