//! Result count line above the cards.

use dioxus::prelude::*;
use medisearch_core::messages;

#[component]
pub fn MetadataStrip(count: usize) -> Element {
    rsx! {
        div {
            class: "metadata-strip",
            span { class: "metadata-count", {messages::result_count(count)} }
        }
    }
}
