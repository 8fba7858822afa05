//! Client configuration: defaults plus optional `.medisearch.toml` overrides.

use std::path::Path;

use reqwest::Url;
use tracing::{debug, warn};

use crate::types::DEFAULT_TOP_K;
use crate::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/search";
pub const CONFIG_FILE_NAME: &str = ".medisearch.toml";

const KNOWN_CONFIG_KEYS: &[&str] = &["endpoint", "top_k"];

/// Where and how the client searches.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Full URL of the search route.
    pub endpoint: Url,
    pub top_k: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: parse_endpoint(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            top_k: DEFAULT_TOP_K,
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid {
        key: "endpoint",
        reason: format!("'{raw}' is not a URL ({e})"),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid {
            key: "endpoint",
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn validate_top_k(n: i64) -> Result<usize, ConfigError> {
    if n < 1 {
        return Err(ConfigError::Invalid { key: "top_k", reason: format!("{n} is not >= 1") });
    }
    Ok(n as usize)
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn warn_unknown_keys(table: &toml::Table) {
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS
            .iter()
            .min_by_key(|k| edit_distance(key, k))
            .copied()
            .unwrap_or_default();
        if edit_distance(key, suggestion) <= 3 {
            warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in {CONFIG_FILE_NAME}, did you mean '{suggestion}'?"
            );
        } else {
            warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            );
        }
    }
}

impl ClientConfig {
    /// Parse config file contents. Unknown keys only warn; bad values are errors.
    pub fn from_table(table: &toml::Table) -> Result<Self, ConfigError> {
        warn_unknown_keys(table);
        let mut config = Self::default();

        if let Some(v) = table.get("endpoint") {
            let raw = v.as_str().ok_or_else(|| ConfigError::Invalid {
                key: "endpoint",
                reason: "expected a string".into(),
            })?;
            config.endpoint = parse_endpoint(raw)?;
        }

        if let Some(v) = table.get("top_k") {
            let n = v.as_integer().ok_or_else(|| ConfigError::Invalid {
                key: "top_k",
                reason: "expected an integer".into(),
            })?;
            config.top_k = validate_top_k(n)?;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let table = content
            .parse::<toml::Table>()
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        Self::from_table(&table)
    }

    /// Override the endpoint, e.g. from a command-line flag.
    pub fn with_endpoint(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.endpoint = parse_endpoint(raw)?;
        Ok(self)
    }

    pub fn with_top_k(mut self, top_k: usize) -> Result<Self, ConfigError> {
        let n = i64::try_from(top_k).map_err(|_| ConfigError::Invalid {
            key: "top_k",
            reason: format!("{top_k} is too large"),
        })?;
        self.top_k = validate_top_k(n)?;
        Ok(self)
    }
}

/// Load `.medisearch.toml` from `dir`.
///
/// A missing file yields defaults. A file that can't be read, parsed, or
/// validated is logged and also yields defaults.
pub fn load_medisearch_config(dir: &Path) -> ClientConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return ClientConfig::default();
    }

    debug!(path = %path.display(), "Loading {CONFIG_FILE_NAME}");
    match ClientConfig::from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Ignoring {CONFIG_FILE_NAME}, using defaults");
            ClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(src: &str) -> toml::Table {
        src.parse().unwrap()
    }

    #[test]
    fn defaults_match_service_contract() {
        let c = ClientConfig::default();
        assert_eq!(c.endpoint.as_str(), "http://127.0.0.1:5000/api/search");
        assert_eq!(c.top_k, 5);
    }

    #[test]
    fn file_values_override_defaults() {
        let c = ClientConfig::from_table(&table(
            "endpoint = \"https://search.example.org/api/search\"\ntop_k = 10\n",
        ))
        .unwrap();
        assert_eq!(c.endpoint.host_str(), Some("search.example.org"));
        assert_eq!(c.top_k, 10);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let c = ClientConfig::from_table(&table("topk = 3\ncolour = \"red\"\n")).unwrap();
        assert_eq!(c, ClientConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            ClientConfig::from_table(&table("top_k = 0")),
            Err(ConfigError::Invalid { key: "top_k", .. })
        ));
        assert!(matches!(
            ClientConfig::from_table(&table("top_k = \"five\"")),
            Err(ConfigError::Invalid { key: "top_k", .. })
        ));
        assert!(matches!(
            ClientConfig::from_table(&table("endpoint = \"ftp://x/api\"")),
            Err(ConfigError::Invalid { key: "endpoint", .. })
        ));
    }

    #[test]
    fn overrides_apply_after_file() {
        let c = ClientConfig::from_table(&table("top_k = 8"))
            .unwrap()
            .with_endpoint("http://localhost:9000/api/search")
            .unwrap()
            .with_top_k(2)
            .unwrap();
        assert_eq!(c.endpoint.port(), Some(9000));
        assert_eq!(c.top_k, 2);
        assert!(ClientConfig::default().with_top_k(0).is_err());
    }

    #[test]
    fn oversized_top_k_override_is_rejected() {
        assert!(matches!(
            ClientConfig::default().with_top_k(usize::MAX),
            Err(ConfigError::Invalid { key: "top_k", .. })
        ));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_medisearch_config(dir.path()), ClientConfig::default());

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "top_k = 7\n").unwrap();
        assert_eq!(load_medisearch_config(dir.path()).top_k, 7);

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "top_k = [[").unwrap();
        assert_eq!(load_medisearch_config(dir.path()), ClientConfig::default());
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("topk", "top_k"), 1);
        assert_eq!(edit_distance("endpoint", "endpoint"), 0);
    }
}
