//! Playlist operations for the Aria profile service.

use crate::error::{Result, ServerClientError};
use crate::types::{PlaylistRecord, SavePlaylistRequest};
use aria_core::types::Track;
use reqwest::Client;
use tracing::debug;

/// Playlists client bound to one authenticated user.
pub struct PlaylistsClient {
    http: Client,
    base_url: String,
    access_token: String,
    user_id: String,
}

impl PlaylistsClient {
    pub(crate) fn new(
        http: Client,
        base_url: String,
        access_token: String,
        user_id: String,
    ) -> Self {
        Self {
            http,
            base_url,
            access_token,
            user_id,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/users/{}/playlists", self.base_url, self.user_id)
    }

    /// Save a generated playlist.
    pub async fn save(
        &self,
        name: impl Into<String>,
        prompt: impl Into<String>,
        tracks: Vec<Track>,
    ) -> Result<PlaylistRecord> {
        let url = self.collection_url();
        let request = SavePlaylistRequest {
            name: name.into(),
            prompt: prompt.into(),
            tracks,
        };
        debug!(url = %url, name = %request.name, "Saving playlist");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let record: PlaylistRecord = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse playlist: {}", e))
            })?;
            Ok(record)
        } else if status.as_u16() == 401 {
            Err(ServerClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// List the user's saved playlists, most recent first.
    pub async fn list(&self) -> Result<Vec<PlaylistRecord>> {
        let url = self.collection_url();
        debug!(url = %url, "Fetching playlists");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let records: Vec<PlaylistRecord> = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse playlists: {}", e))
            })?;
            Ok(records)
        } else if status.as_u16() == 401 {
            Err(ServerClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
