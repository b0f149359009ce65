//! Types for profile-service and catalog API requests and responses.

use aria_core::types::{SourceRef, Track};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for connecting to the profile service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the service (e.g., "https://profiles.example.com")
    pub url: String,
    /// Current access token (if authenticated)
    pub access_token: Option<String>,
    /// Authenticated user id (if authenticated)
    pub user_id: Option<String>,
}

impl ServerConfig {
    /// Create a new server config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
            user_id: None,
        }
    }

    /// Create a config with an existing session.
    pub fn with_session(
        url: impl Into<String>,
        access_token: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            access_token: Some(access_token.into()),
            user_id: Some(user_id.into()),
        }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: String,
    pub username: Option<String>,
}

// =============================================================================
// Profile Types
// =============================================================================

/// Request body for adding listening minutes.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddMinutesRequest {
    pub minutes: u64,
}

// =============================================================================
// Playlist Types
// =============================================================================

/// Request body for saving a generated playlist.
#[derive(Debug, Serialize, Deserialize)]
pub struct SavePlaylistRequest {
    pub name: String,
    pub prompt: String,
    pub tracks: Vec<Track>,
}

/// A playlist record as returned by the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistRecord {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub tracks: Vec<Track>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Catalog Types
// =============================================================================

/// Response envelope of the catalog search API.
#[derive(Debug, Deserialize)]
pub struct CatalogSearchResponse {
    pub results: Vec<CatalogTrack>,
}

/// One catalog search result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTrack {
    pub track_id: u64,
    pub track_name: String,
    pub artist_name: String,
    pub artwork_url100: Option<String>,
    pub preview_url: Option<String>,
    pub track_time_millis: Option<u64>,
    pub primary_genre_name: Option<String>,
}

impl CatalogTrack {
    /// Map a catalog result into a playable track.
    ///
    /// Returns `None` for results without a preview URL, which this player
    /// cannot play. Artwork is upscaled from the thumbnail the API returns.
    pub fn into_track(self) -> Option<Track> {
        let preview_url = self.preview_url?;
        let mut track = Track::new(
            self.track_id.to_string(),
            self.track_name,
            self.artist_name,
            SourceRef::Url(preview_url),
        );
        if let Some(artwork) = self.artwork_url100 {
            track = track.with_cover(artwork.replace("100x100", "600x600"));
        }
        if let Some(genre) = self.primary_genre_name {
            track = track.with_genre(genre);
        }
        if let Some(millis) = self.track_time_millis {
            track = track.with_duration_hint(Duration::from_millis(millis));
        }
        Some(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_track_maps_to_playable_track() {
        let raw = CatalogTrack {
            track_id: 42,
            track_name: "Night Drive".into(),
            artist_name: "Neon Fields".into(),
            artwork_url100: Some("https://img.example.com/100x100/cover.jpg".into()),
            preview_url: Some("https://cdn.example.com/preview.m4a".into()),
            track_time_millis: Some(215_000),
            primary_genre_name: Some("Synthwave".into()),
        };

        let track = raw.into_track().unwrap();
        assert_eq!(track.id, "42");
        assert_eq!(
            track.cover_url.as_deref(),
            Some("https://img.example.com/600x600/cover.jpg")
        );
        assert_eq!(track.source, SourceRef::Url("https://cdn.example.com/preview.m4a".into()));
        assert_eq!(track.duration_hint, Some(Duration::from_millis(215_000)));
    }

    #[test]
    fn catalog_track_without_preview_is_unplayable() {
        let raw = CatalogTrack {
            track_id: 7,
            track_name: "No Preview".into(),
            artist_name: "Anyone".into(),
            artwork_url100: None,
            preview_url: None,
            track_time_millis: None,
            primary_genre_name: None,
        };

        assert!(raw.into_track().is_none());
    }
}
