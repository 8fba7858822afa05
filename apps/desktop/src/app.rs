//! Root application component and page chrome.

use dioxus::prelude::*;
use medisearch_core::messages;

use crate::search::{PillIcon, SearchPanel};
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    let results_visible = SEARCH.read().results_visible();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            header {
                class: "app-header",
                div {
                    class: "app-header-inner",
                    PillIcon { size: 32 }
                    h1 { class: "app-title", {messages::APP_NAME} }
                }
            }

            main {
                class: "app-main",

                // Centered logo until the first search starts
                if !results_visible {
                    Hero {}
                }

                SearchPanel {}
            }

            Footer {}
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        div {
            class: "hero",
            div {
                class: "hero-badge",
                PillIcon { size: 48 }
            }
            h2 { class: "hero-title", {messages::APP_NAME} }
            p { class: "hero-tagline", {messages::TAGLINE} }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "app-footer",
            p { {messages::FOOTER_TITLE} }
            p { class: "app-footer-source", {messages::FOOTER_SOURCE} }
        }
    }
}
