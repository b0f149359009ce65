//! Liked-tracks operations for the Aria profile service.

use crate::error::{Result, ServerClientError};
use aria_core::types::Track;
use reqwest::Client;
use tracing::debug;

/// Favorites client bound to one authenticated user.
pub struct FavoritesClient {
    http: Client,
    base_url: String,
    access_token: String,
    user_id: String,
}

impl FavoritesClient {
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
        format!("{}/api/users/{}/liked-tracks", self.base_url, self.user_id)
    }

    /// List the user's liked tracks, oldest like first.
    pub async fn list(&self) -> Result<Vec<Track>> {
        let url = self.collection_url();
        debug!(url = %url, "Fetching liked tracks");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let tracks: Vec<Track> = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse liked tracks: {}", e))
            })?;
            debug!(count = tracks.len(), "Fetched liked tracks");
            Ok(tracks)
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

    /// Persist a newly liked track.
    pub async fn insert(&self, track: &Track) -> Result<()> {
        let url = self.collection_url();
        debug!(url = %url, track_id = %track.id, "Inserting liked track");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(track)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            Ok(())
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

    /// Remove a track from the liked set.
    pub async fn delete(&self, track_id: &str) -> Result<()> {
        let url = format!("{}/{}", self.collection_url(), track_id);
        debug!(url = %url, "Deleting liked track");

        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            Ok(())
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
