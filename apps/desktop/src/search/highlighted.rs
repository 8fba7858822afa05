//! Renders highlight fragments as text nodes inside `mark` elements.

use dioxus::prelude::*;
use medisearch_core::highlight::Highlighted;

#[component]
pub fn HighlightedText(text: Highlighted) -> Element {
    rsx! {
        span {
            for frag in text.fragments() {
                if frag.is_highlighted() {
                    // Depth > 1 means several query words overlapped here.
                    mark {
                        class: "hl",
                        "data-depth": "{frag.depth}",
                        "{frag.text}"
                    }
                } else {
                    span { "{frag.text}" }
                }
            }
        }
    }
}
