//! Track catalog search client.
//!
//! Free-text search against an external song catalog. No key or session
//! is required; results map into playable tracks (preview-length
//! sources), dropping entries the player cannot play.

use crate::error::{Result as ClientResult, ServerClientError};
use crate::types::CatalogSearchResponse;
use aria_core::traits::CatalogSearch;
use aria_core::types::Track;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const DEFAULT_RESULT_LIMIT: u32 = 20;

/// Catalog search client.
pub struct CatalogClient {
    http: Client,
    base_url: String,
    limit: u32,
}

impl CatalogClient {
    /// Create a catalog client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(format!("AriaPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            limit: DEFAULT_RESULT_LIMIT,
        })
    }

    /// Override the result limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    async fn search_catalog(&self, query: &str) -> ClientResult<Vec<Track>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search", self.base_url);
        debug!(url = %url, query = %query, "Searching catalog");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("term", query),
                ("media", "music"),
                ("entity", "song"),
                ("limit", &self.limit.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let body: CatalogSearchResponse = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse search results: {}", e))
            })?;

            let tracks: Vec<Track> = body
                .results
                .into_iter()
                .filter_map(super::types::CatalogTrack::into_track)
                .collect();
            debug!(count = tracks.len(), "Catalog search returned tracks");
            Ok(tracks)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl CatalogSearch for CatalogClient {
    async fn search(&self, query: &str) -> aria_core::Result<Vec<Track>> {
        Ok(self.search_catalog(query).await?)
    }
}
