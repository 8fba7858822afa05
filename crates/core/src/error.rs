//! Error types for the search client and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// A search request that did not produce a usable response.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Connection refused, DNS failure, broken body stream, and the like.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// Any non-2xx response. The body is not inspected.
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}
