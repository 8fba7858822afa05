//! Presentation model for one result card, shared by the desktop view and the CLI.

use reqwest::Url;
use serde::Serialize;

use crate::highlight::{highlight, Highlighted};
use crate::messages;
use crate::types::SearchResult;

/// Placeholder `url` the service sends for entries without a page.
pub const URL_SENTINEL: &str = "#";

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/80x80/ef4444/white?text=";

/// Host label for a result URL. Missing, sentinel, unparsable, or host-less
/// URLs all fall back to [`messages::FALLBACK_HOSTNAME`].
pub fn resolve_hostname(url: Option<&str>) -> String {
    let url = match url {
        Some(u) if !u.is_empty() && u != URL_SENTINEL => u,
        _ => return messages::FALLBACK_HOSTNAME.to_string(),
    };
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| messages::FALLBACK_HOSTNAME.to_string())
}

/// `Score: 87.3%`, or `None` when there is no score to show.
///
/// A zero score hides the badge like a missing one. Ties round away from
/// zero: `0.1225` shows as `12.3%`.
pub fn score_badge(score: Option<f64>) -> Option<String> {
    match score {
        Some(s) if s != 0.0 && !s.is_nan() => {
            let pct = (s * 100.0 * 10.0).round() / 10.0;
            Some(format!("Score: {pct:.1}%"))
        }
        _ => None,
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

/// Everything a card displays, resolved from one [`SearchResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    /// `doc_id` when present, otherwise the result's position.
    pub key: String,
    pub title: Highlighted,
    /// External link; `None` renders the title as plain text.
    pub link: Option<String>,
    pub hostname: String,
    pub image_url: String,
    pub image_alt: String,
    pub score_badge: Option<String>,
    pub snippet: Highlighted,
}

impl ResultCard {
    pub fn build(index: usize, result: &SearchResult, query: &str) -> Self {
        let name = non_empty(&result.name);
        let title = match name {
            Some(n) => highlight(n, query),
            None => Highlighted::plain(messages::NAME_PLACEHOLDER),
        };

        let link = non_empty(&result.url)
            .filter(|u| *u != URL_SENTINEL)
            .map(str::to_string);

        let image_url = match non_empty(&result.image_url) {
            Some(u) => u.to_string(),
            None => {
                let initial = name.and_then(|n| n.chars().next()).unwrap_or('M');
                format!("{PLACEHOLDER_IMAGE}{initial}")
            }
        };

        let snippet = match non_empty(&result.snippet) {
            Some(s) => highlight(s, query),
            None => Highlighted::plain(messages::SNIPPET_FALLBACK),
        };

        ResultCard {
            key: non_empty(&result.doc_id)
                .map(str::to_string)
                .unwrap_or_else(|| index.to_string()),
            title,
            link,
            hostname: resolve_hostname(result.url.as_deref()),
            image_url,
            image_alt: name.unwrap_or(messages::NAME_PLACEHOLDER).to_string(),
            score_badge: score_badge(result.score),
            snippet,
        }
    }

    /// Cards for a result list, in server order.
    pub fn build_all(results: &[SearchResult], query: &str) -> Vec<Self> {
        results
            .iter()
            .enumerate()
            .map(|(i, r)| Self::build(i, r, query))
            .collect()
    }
}
