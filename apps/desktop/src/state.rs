//! Global view state using Dioxus signals.

use std::sync::OnceLock;

use dioxus::prelude::*;
use medisearch_core::{SearchBackend, SearchClient, SearchState};
use tracing::error;

/// Search client, set once in `main` before launch.
pub static CLIENT: OnceLock<SearchClient> = OnceLock::new();

/// The whole search view state. Every event replaces it through one write.
pub static SEARCH: GlobalSignal<SearchState> = Signal::global(SearchState::new);

/// Submit the current query: validate, mark loading, and spawn the request.
///
/// Not debounced and never cancels an earlier request; a late response from
/// a superseded search is discarded by `settle`.
pub fn run_search() {
    let Some(client) = CLIENT.get().cloned() else {
        error!("Search client not initialized");
        return;
    };

    let pending = match SEARCH.write().submit() {
        Ok(p) => p,
        Err(_) => return,
    };

    spawn(async move {
        let outcome = client.search(&pending.query).await;
        SEARCH.write().settle(&pending, outcome);
    });
}
