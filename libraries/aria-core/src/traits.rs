/// Boundary traits for Aria Player
///
/// The playback core is synchronous and single-threaded; everything it
/// needs from the outside world comes in through these seams. The
/// favorites/listening traits are synchronous because the core never
/// awaits a remote write — implementations are free to complete the work
/// out of band. The catalog/recommendation traits are async because their
/// consumers (playlist generation) run at the session's async edge.
use crate::error::Result;
use crate::types::{Recommendation, Track};
use async_trait::async_trait;

/// Persistence for the liked-tracks set.
///
/// Implementations may be a remote store or a local durable fallback.
/// Mutation failures are reported but callers keep their in-memory state
/// authoritative regardless of the outcome.
pub trait FavoritesBackend: Send {
    /// Load the persisted liked tracks, insertion order preserved
    fn load(&mut self) -> Result<Vec<Track>>;

    /// Persist a newly liked track
    fn insert(&mut self, track: &Track) -> Result<()>;

    /// Remove a track from the persisted set
    fn remove(&mut self, track_id: &str) -> Result<()>;
}

/// Destination for flushed listening minutes.
///
/// A successful return means the minutes were durably added to the remote
/// running total; the accumulator only reduces its counter on success.
pub trait ListeningSink: Send {
    /// Add whole minutes to the remote running total
    fn add_minutes(&mut self, minutes: u64) -> Result<()>;
}

/// Free-text track search against an external catalog.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Search the catalog, returning tracks in relevance order
    async fn search(&self, query: &str) -> Result<Vec<Track>>;

    /// Find the single best match for a title/artist pair
    async fn best_match(&self, title: &str, artist: &str) -> Result<Option<Track>> {
        let results = self.search(&format!("{title} {artist}")).await?;
        Ok(results.into_iter().next())
    }
}

/// AI playlist generation boundary.
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Produce recommendations for a prompt, given the user's local
    /// library for context
    async fn recommend(&self, prompt: &str, library: &[Track]) -> Result<Vec<Recommendation>>;
}
