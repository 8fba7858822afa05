//! Shown when a search completed without error and returned nothing.

use dioxus::prelude::*;
use medisearch_core::messages;

use super::icons::AlertIcon;

#[component]
pub fn EmptyState(term: String) -> Element {
    let (before, after) = messages::NOT_IN_DATABASE;

    rsx! {
        div {
            class: "empty-state",
            AlertIcon { size: 64 }
            p { class: "empty-title", {messages::NO_RESULTS_TITLE} }
            p {
                class: "empty-text",
                "{before}"
                span { class: "empty-term", "{term}" }
                "{after}"
            }
            p { class: "empty-text", "💡 " {messages::SUGGESTIONS_TITLE} }
            ul {
                class: "empty-tips",
                for tip in messages::SUGGESTIONS {
                    li { "• {tip}" }
                }
            }
        }
    }
}
