//! HTTP client for the medicine search service.

use std::future::Future;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::types::{BackendStats, SearchOutcome, SearchRequest, SearchResponse};
use crate::SearchError;

/// Anything that can answer a search query. The view state only needs this.
pub trait SearchBackend {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<SearchOutcome, SearchError>> + Send;
}

/// reqwest-backed client. Cheap to clone; clones share one connection pool.
///
/// No timeout or retry is configured: a request waits as long as the
/// transport does, and a failure surfaces once.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
    top_k: usize,
}

impl SearchClient {
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder().build().map_err(SearchError::Transport)?;
        Ok(Self { http, endpoint: config.endpoint.clone(), top_k: config.top_k })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// `POST {endpoint}` with `{"query", "top_k"}`, decoded to raw response.
    pub async fn search_raw(&self, query: &str) -> Result<SearchResponse, SearchError> {
        debug!(endpoint = %self.endpoint, query, top_k = self.top_k, "POST search");
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&SearchRequest::new(query, self.top_k))
            .send()
            .await
            .map_err(SearchError::Transport)?;
        read_json(resp).await
    }

    /// `GET /api/stats` on the endpoint's host.
    pub async fn stats(&self) -> Result<BackendStats, SearchError> {
        let mut url = self.endpoint.clone();
        url.set_path("/api/stats");
        url.set_query(None);
        debug!(%url, "GET stats");
        let resp = self.http.get(url).send().await.map_err(SearchError::Transport)?;
        read_json(resp).await
    }
}

/// Reject non-2xx without reading the body, then decode JSON.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, SearchError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(SearchError::Status(status));
    }
    let body = resp.bytes().await.map_err(SearchError::Transport)?;
    serde_json::from_slice(&body).map_err(SearchError::Decode)
}

impl SearchBackend for SearchClient {
    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        self.search_raw(query).await.map(SearchOutcome::from)
    }
}
