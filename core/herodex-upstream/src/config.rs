//! Upstream configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Suffix that marks a source URL as a full dataset download.
pub const DATASET_SUFFIX: &str = "/all.json";

/// Default base URL of the token-gated search API.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://superheroapi.com";

/// Upstream settings, usually loaded from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Dataset URL. Only used when it ends in [`DATASET_SUFFIX`].
    pub source: Option<String>,
    /// Access token for the search API.
    pub token: Option<String>,
    /// Base URL of the search API (e.g. `https://superheroapi.com`).
    pub search_base_url: String,
    /// How long a single upstream request may take (in seconds).
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            source: None,
            token: None,
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl UpstreamConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolves which upstream to query.
    ///
    /// A dataset source takes precedence over a token. Empty values count
    /// as unset.
    #[must_use]
    pub fn mode(&self) -> UpstreamMode {
        let source = self.source.as_deref().filter(|s| !s.is_empty());
        let token = self.token.as_deref().filter(|t| !t.is_empty());

        match (source, token) {
            (Some(url), _) if url.ends_with(DATASET_SUFFIX) => UpstreamMode::Dataset {
                url: url.to_string(),
            },
            (_, Some(token)) => UpstreamMode::Search {
                base_url: self.search_base_url.trim_end_matches('/').to_string(),
                token: token.to_string(),
            },
            _ => UpstreamMode::Disabled,
        }
    }
}

/// The upstream selected by an [`UpstreamConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamMode {
    /// Download the whole dataset and scan it.
    Dataset { url: String },
    /// Query the search API.
    Search { base_url: String, token: String },
    /// Nothing configured; every lookup is "not found".
    Disabled,
}

impl UpstreamMode {
    /// Short label for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            UpstreamMode::Dataset { .. } => "dataset",
            UpstreamMode::Search { .. } => "search",
            UpstreamMode::Disabled => "disabled",
        }
    }
}
