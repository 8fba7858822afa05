//! Search view state as a single snapshot.
//!
//! All mutation goes through three events: [`SearchState::begin`] (submit),
//! [`SearchState::settle`] (request finished), and the validation rejection
//! folded into `begin`. Each event updates every field at once, and
//! [`SearchState::view`] derives the one branch to render.

use tracing::{debug, error, info};

use crate::card::ResultCard;
use crate::messages;
use crate::types::{SearchOutcome, SearchResult};
use crate::SearchError;

/// A submitted search waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    /// Raw query as typed; sent to the service untrimmed.
    pub query: String,
    generation: u64,
}

impl PendingSearch {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Returned by [`SearchState::begin`] when the query is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQuery;

/// What the view should render, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    /// No search submitted yet: logo and tagline.
    Initial,
    Loading,
    /// Error banner. Stale results stay hidden.
    Error(&'a str),
    Results(&'a [SearchResult]),
    /// Search completed with nothing to show; carries the searched term.
    Empty(&'a str),
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Live input text.
    pub query: String,
    results: Vec<SearchResult>,
    /// Query of the latest submitted search, shown by the empty-state panel.
    searched: String,
    is_loading: bool,
    results_visible: bool,
    error: Option<&'static str>,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn searched(&self) -> &str {
        &self.searched
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Cards for the current results, highlighted with the live input text.
    ///
    /// Editing the input after a search re-highlights the shown results.
    pub fn cards(&self) -> Vec<ResultCard> {
        ResultCard::build_all(&self.results, &self.query)
    }

    /// Current error message, empty when there is none.
    pub fn error_message(&self) -> &str {
        self.error.unwrap_or("")
    }

    /// Submit `self.query`.
    pub fn submit(&mut self) -> Result<PendingSearch, EmptyQuery> {
        let query = self.query.clone();
        self.begin(&query)
    }

    /// Start a search for `query`.
    ///
    /// A blank query sets the validation message and starts nothing. Otherwise
    /// the state enters loading with results visible and the error cleared,
    /// and the caller must send exactly one request for the returned
    /// [`PendingSearch`] and hand its outcome to [`settle`](Self::settle).
    pub fn begin(&mut self, query: &str) -> Result<PendingSearch, EmptyQuery> {
        if query.trim().is_empty() {
            debug!("Rejected empty query");
            self.error = Some(messages::EMPTY_QUERY);
            return Err(EmptyQuery);
        }

        self.generation += 1;
        self.is_loading = true;
        self.results_visible = true;
        self.error = None;
        self.searched = query.to_string();
        info!(query, generation = self.generation, "Search started");

        Ok(PendingSearch { query: query.to_string(), generation: self.generation })
    }

    /// Apply the outcome of a request started by [`begin`](Self::begin).
    ///
    /// Outcomes from superseded requests are dropped, so an older response that
    /// arrives late never overwrites a newer one. Returns whether the outcome
    /// was applied.
    pub fn settle(
        &mut self,
        pending: &PendingSearch,
        outcome: Result<SearchOutcome, SearchError>,
    ) -> bool {
        if pending.generation != self.generation {
            debug!(
                query = pending.query.as_str(),
                generation = pending.generation,
                latest = self.generation,
                "Dropping stale search response"
            );
            return false;
        }

        match outcome {
            Ok(SearchOutcome::Matches(results)) => {
                info!(query = pending.query.as_str(), count = results.len(), "Search finished");
                self.results = results;
                self.error = None;
            }
            Ok(SearchOutcome::NoMatches(message)) => {
                info!(query = pending.query.as_str(), %message, "Search returned no results");
                self.results.clear();
                self.error = None;
            }
            Err(e) => {
                // Stale results are kept; the error view hides them.
                error!(query = pending.query.as_str(), error = %e, "Search request failed");
                self.error = Some(messages::CONNECTION_ERROR);
            }
        }
        self.is_loading = false;
        true
    }

    /// The render branch for the current snapshot.
    pub fn view(&self) -> View<'_> {
        if self.is_loading {
            View::Loading
        } else if let Some(msg) = self.error {
            View::Error(msg)
        } else if !self.results_visible {
            View::Initial
        } else if !self.results.is_empty() {
            View::Results(&self.results)
        } else {
            View::Empty(&self.searched)
        }
    }
}
