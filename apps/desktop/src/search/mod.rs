//! Search panel: the input followed by the one branch the state selects.

mod empty_state;
mod highlighted;
mod icons;
mod metadata_strip;
mod result_card;
mod search_input;

use dioxus::prelude::*;
use medisearch_core::{messages, View};

use crate::state::*;
use empty_state::EmptyState;
use icons::{AlertIcon, SpinnerIcon};
use metadata_strip::MetadataStrip;
use result_card::ResultCardView;
use search_input::SearchInput;

pub use icons::PillIcon;

#[component]
pub fn SearchPanel() -> Element {
    let search = SEARCH.read();
    let class = if search.results_visible() { "search-panel active" } else { "search-panel" };

    let body = match search.view() {
        View::Initial => rsx! {},
        View::Loading => rsx! {
            div {
                class: "loading",
                SpinnerIcon { size: 48 }
                p { {messages::LOADING} }
            }
        },
        View::Error(message) => rsx! { ErrorBanner { message: message.to_string() } },
        View::Results(_) => {
            let cards = search.cards();
            rsx! {
                MetadataStrip { count: cards.len() }
                div {
                    class: "results-list",
                    for card in cards {
                        ResultCardView { key: "{card.key}", card: card.clone() }
                    }
                }
            }
        }
        View::Empty(term) => rsx! { EmptyState { term: term.to_string() } },
    };

    rsx! {
        div {
            class: "{class}",
            SearchInput {}
            {body}
        }
    }
}

#[component]
fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "error-banner",
            AlertIcon { size: 20 }
            p { class: "error-text", "{message}" }
        }
    }
}
