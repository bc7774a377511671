//! HTTP client for the upstream hero source.

use crate::config::{UpstreamConfig, UpstreamMode};
use crate::error::UpstreamResult;
use crate::normalize::hero_from_entry;
use async_trait::async_trait;
use herodex_types::HeroStats;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// A lookup of hero stats by name.
#[async_trait]
pub trait HeroSource: Send + Sync {
    /// Looks up a hero by name, ignoring case.
    ///
    /// Returns `None` when the hero is unknown or the source is unavailable.
    async fn fetch(&self, name: &str) -> Option<HeroStats>;
}

/// [`HeroSource`] backed by the configured upstream HTTP service.
pub struct UpstreamClient {
    mode: UpstreamMode,
    client: Client,
}

impl UpstreamClient {
    /// Creates a client for the upstream selected by `config`.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            mode: config.mode(),
            client,
        })
    }

    /// The upstream this client queries.
    pub fn mode(&self) -> &UpstreamMode {
        &self.mode
    }

    /// Downloads the full dataset and scans it for `target`.
    async fn fetch_dataset(&self, url: &str, target: &str) -> UpstreamResult<Option<HeroStats>> {
        let body = self.get_json(url).await?;
        let hero = body
            .as_array()
            .and_then(|entries| entries.iter().find_map(|entry| hero_from_entry(entry, target)));
        Ok(hero)
    }

    /// Queries the search API and scans its candidates for `target`.
    async fn fetch_search(
        &self,
        base_url: &str,
        token: &str,
        name: &str,
        target: &str,
    ) -> UpstreamResult<Option<HeroStats>> {
        let url = format!(
            "{}/api/{}/search/{}",
            base_url,
            urlencoding::encode(token),
            urlencoding::encode(name)
        );
        let body = self.get_json(&url).await?;

        if body.get("response").and_then(Value::as_str) != Some("success") {
            debug!("Search API reported no results for {:?}", name);
            return Ok(None);
        }

        let hero = body
            .get("results")
            .and_then(Value::as_array)
            .and_then(|results| results.iter().find_map(|entry| hero_from_entry(entry, target)));
        Ok(hero)
    }

    // URLs are stripped from errors since search URLs embed the token.
    async fn get_json(&self, url: &str) -> UpstreamResult<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(reqwest::Error::without_url)?;
        let bytes = response.bytes().await.map_err(reqwest::Error::without_url)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl HeroSource for UpstreamClient {
    async fn fetch(&self, name: &str) -> Option<HeroStats> {
        let name = name.trim();
        let target = name.to_lowercase();
        debug!("Looking up {:?} via {} upstream", name, self.mode.label());

        let result = match &self.mode {
            UpstreamMode::Dataset { url } => self.fetch_dataset(url, &target).await,
            UpstreamMode::Search { base_url, token } => {
                self.fetch_search(base_url, token, name, &target).await
            }
            UpstreamMode::Disabled => Ok(None),
        };

        match result {
            Ok(hero) => hero,
            Err(e) => {
                warn!("Upstream lookup for {:?} failed: {}", name, e);
                None
            }
        }
    }
}
