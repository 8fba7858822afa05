//! MediSearch core: everything behind the search view except the widgets.
//!
//! The view submits a query through [`state::SearchState`], sends it with a
//! [`client::SearchBackend`], settles the outcome back into the state, and
//! renders whichever [`state::View`] branch results.
//!
//! # Modules
//!
//! - [`types`]: Wire types for the search service
//! - [`state`]: View state snapshot and render-branch selection
//! - [`client`]: reqwest client and the backend trait
//! - [`highlight`]: Query-word highlighting as safe text fragments
//! - [`card`]: Per-result presentation (title, link, hostname, score badge)
//! - [`config`]: Endpoint and `top_k` from defaults and `.medisearch.toml`
//! - [`messages`]: Display strings

pub mod card;
pub mod client;
pub mod config;
mod error;
pub mod highlight;
pub mod messages;
pub mod state;
pub mod types;

pub use client::{SearchBackend, SearchClient};
pub use config::{load_medisearch_config, ClientConfig};
pub use error::{ConfigError, SearchError};
pub use state::{SearchState, View};

use tracing::debug;

/// Run one full submit cycle against `backend`: validate, send, settle.
///
/// For callers that own the state across the await (CLI, tests). The desktop
/// view splits these steps around its signal writes instead.
pub async fn submit<B: SearchBackend>(state: &mut SearchState, backend: &B) {
    let pending = match state.submit() {
        Ok(p) => p,
        Err(_) => return,
    };
    let outcome = backend.search(&pending.query).await;
    if !state.settle(&pending, outcome) {
        debug!(generation = pending.generation(), "Outcome superseded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SearchOutcome, SearchResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend that records calls and replays a fixed answer.
    struct Scripted {
        calls: AtomicUsize,
        answer: fn() -> Result<SearchOutcome, SearchError>,
    }

    impl Scripted {
        fn new(answer: fn() -> Result<SearchOutcome, SearchError>) -> Self {
            Self { calls: AtomicUsize::new(0), answer }
        }
    }

    impl SearchBackend for Scripted {
        async fn search(&self, _query: &str) -> Result<SearchOutcome, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.answer)()
        }
    }

    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
    }

    #[test]
    fn blank_query_never_reaches_backend() {
        let backend = Scripted::new(|| Ok(SearchOutcome::Matches(vec![])));
        for q in ["", "   ", "\t\n"] {
            let mut state = SearchState::new();
            state.query = q.into();
            block_on(submit(&mut state, &backend));
            assert_eq!(state.error_message(), messages::EMPTY_QUERY);
        }
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn rejection_sets_connection_error_and_stops_loading() {
        let backend = Scripted::new(|| {
            Err(SearchError::Decode(serde_json::from_str::<u8>("nope").unwrap_err()))
        });
        let mut state = SearchState::new();
        state.query = "doliprane".into();
        block_on(submit(&mut state, &backend));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert!(!state.is_loading());
        assert_eq!(state.view(), View::Error(messages::CONNECTION_ERROR));
    }

    #[test]
    fn success_populates_results() {
        let backend = Scripted::new(|| {
            Ok(SearchOutcome::Matches(vec![SearchResult {
                name: Some("Doliprane".into()),
                ..Default::default()
            }]))
        });
        let mut state = SearchState::new();
        state.query = "doliprane".into();
        block_on(submit(&mut state, &backend));
        assert!(matches!(state.view(), View::Results(r) if r.len() == 1));
    }
}
