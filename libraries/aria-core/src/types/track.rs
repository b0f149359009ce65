/// Track domain type
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Reference to the playable media behind a track.
///
/// Playback is delegated to an embedded third-party backend, so a track
/// carries either a direct stream URL or a backend-specific media
/// identifier. The engine treats both as opaque; only the backend
/// implementation interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceRef {
    /// Direct stream URL (e.g. a catalog preview URL)
    Url(String),

    /// Backend-specific media identifier (e.g. an embedded video id)
    EmbedId(String),
}

impl SourceRef {
    /// The raw reference string, regardless of kind
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url(s) | Self::EmbedId(s) => s,
        }
    }
}

/// A playable item with identity and display metadata.
///
/// Tracks are immutable once placed in a queue; replacing one means
/// removing and re-adding. The identifier is unique within a session and
/// may come from an external catalog or be generated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier (catalog id or locally generated)
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Cover image URL
    pub cover_url: Option<String>,

    /// Playable source reference
    pub source: SourceRef,

    /// Genre, when the catalog reports one
    pub genre: Option<String>,

    /// Duration hint from the catalog; the backend's reported duration is
    /// authoritative once known
    pub duration_hint: Option<Duration>,
}

impl Track {
    /// Create a track with a known identifier
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        source: SourceRef,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            cover_url: None,
            source,
            genre: None,
            duration_hint: None,
        }
    }

    /// Create a track with a locally generated identifier
    pub fn local(
        title: impl Into<String>,
        artist: impl Into<String>,
        source: SourceRef,
    ) -> Self {
        Self::new(Uuid::new_v4().to_string(), title, artist, source)
    }

    /// Attach a cover image URL
    pub fn with_cover(mut self, url: impl Into<String>) -> Self {
        self.cover_url = Some(url.into());
        self
    }

    /// Attach a genre
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Attach a duration hint
    pub fn with_duration_hint(mut self, duration: Duration) -> Self {
        self.duration_hint = Some(duration);
        self
    }
}
