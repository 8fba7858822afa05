//! Wire types exchanged with the medicine search service: the request body, the
//! ranked result entries, the response envelope, and backend statistics.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of results requested per search.
pub const DEFAULT_TOP_K: usize = 5;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body of `POST /api/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, top_k: usize) -> Self {
        Self { query: query.into(), top_k }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One ranked item returned by the search service.
///
/// Every field is optional on the wire. The service fills unknown entries with
/// sentinels (`url: "#"`, `image_url: ""`), so presentation code treats empty
/// strings the same as missing values; see [`crate::card::ResultCard`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Stable document key (e.g. `"12.md"`), used to key rendered cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    /// Numeric or string depending on the index build; never displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Display name of the medicine.
    #[serde(default, rename = "nom", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Relevance in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Success body of `POST /api/search`.
///
/// A truthy `message` means the service had nothing to return; it wins over
/// any `results` present in the same body. `null`, `""`, `false` and `0`
/// count as no message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub total_results: Option<usize>,
    /// Server-side search time in seconds.
    #[serde(default)]
    pub search_time: Option<f64>,
}

/// What a successful search produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Results in server order (possibly empty).
    Matches(Vec<SearchResult>),
    /// The service answered with a `message` instead of results.
    NoMatches(String),
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<SearchResponse> for SearchOutcome {
    fn from(resp: SearchResponse) -> Self {
        match resp.message {
            Some(Value::String(message)) if !message.is_empty() => {
                SearchOutcome::NoMatches(message)
            }
            Some(other) if is_truthy(&other) => SearchOutcome::NoMatches(other.to_string()),
            _ => SearchOutcome::Matches(resp.results.unwrap_or_default()),
        }
    }
}

impl SearchOutcome {
    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            SearchOutcome::Matches(results) => results,
            SearchOutcome::NoMatches(_) => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Body of `GET /api/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendStats {
    #[serde(default)]
    pub total_terms: usize,
    #[serde(default)]
    pub total_documents: usize,
    #[serde(default)]
    pub total_medicaments: usize,
    #[serde(default)]
    pub indexed_medicaments: usize,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub status: String,
}
