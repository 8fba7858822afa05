//! One search result: image, linked title, hostname, score badge, snippet.

use dioxus::prelude::*;
use medisearch_core::card::ResultCard;

use super::highlighted::HighlightedText;
use super::icons::ExternalLinkIcon;

#[component]
pub fn ResultCardView(card: ResultCard) -> Element {
    let title = rsx! {
        h3 {
            class: if card.link.is_some() { "result-title linked" } else { "result-title" },
            HighlightedText { text: card.title.clone() }
            if card.link.is_some() {
                ExternalLinkIcon { size: 16 }
            }
        }
    };

    rsx! {
        article {
            class: "result-card",

            div {
                class: "result-image",
                img { src: "{card.image_url}", alt: "{card.image_alt}" }
            }

            div {
                class: "result-body",

                if let Some(href) = card.link.clone() {
                    a {
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {title}
                    }
                } else {
                    {title}
                }

                div { class: "result-hostname", "{card.hostname}" }

                if let Some(badge) = card.score_badge.clone() {
                    div { class: "result-score", "{badge}" }
                }

                p {
                    class: "result-snippet",
                    HighlightedText { text: card.snippet.clone() }
                }
            }
        }
    }
}
