/// AI recommendation types
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// One entry of an AI-curated playlist, as returned by the recommendation
/// boundary. Not yet playable; it must be resolved against the local
/// library or the catalog search boundary first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Short reason why the entry fits the prompt
    pub reason: String,

    /// Whether the recommender claims the entry comes from the provided
    /// local library
    #[serde(default)]
    pub is_local: bool,
}

/// A recommendation resolved to a playable track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTrack {
    /// The playable track
    pub track: Track,

    /// Reason carried over from the recommendation
    pub reason: String,

    /// True when the track came from the catalog boundary rather than the
    /// local library (catalog results are typically preview-length)
    pub is_preview: bool,
}
