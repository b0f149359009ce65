//! Like/favorites store
//!
//! Optimistic in-memory liked set backed by a remote store when an
//! authenticated identity exists, or a local durable fallback otherwise.
//! In-memory state is authoritative for reads regardless of persistence
//! outcome: a failed remote write is logged and never rolled back (the
//! remote converges on a later successful call).

use aria_core::traits::FavoritesBackend;
use aria_core::types::Track;
use std::collections::HashSet;
use tracing::{info, warn};

/// Liked-tracks store
pub struct LikeStore {
    /// Liked tracks, insertion order preserved for display and
    /// playback-as-queue
    tracks: Vec<Track>,

    /// Membership index by track id
    ids: HashSet<String>,

    /// Remote persistence, present when a session identity exists
    remote: Option<Box<dyn FavoritesBackend>>,

    /// Local durable fallback, used for writes only when no remote exists
    local: Box<dyn FavoritesBackend>,
}

impl LikeStore {
    /// Populate the store for a session.
    ///
    /// With a remote backend present its contents win; the local fallback
    /// is only read when the remote load fails or no remote exists. The
    /// two are never merged.
    pub fn open(
        mut remote: Option<Box<dyn FavoritesBackend>>,
        mut local: Box<dyn FavoritesBackend>,
    ) -> Self {
        let initial = match remote.as_mut() {
            Some(backend) => match backend.load() {
                Ok(tracks) => {
                    info!(count = tracks.len(), "Loaded liked tracks from remote");
                    tracks
                }
                Err(e) => {
                    warn!(error = %e, "Remote favorites load failed, using local fallback");
                    Self::load_local(local.as_mut())
                }
            },
            None => Self::load_local(local.as_mut()),
        };

        let ids = initial.iter().map(|t| t.id.clone()).collect();
        Self {
            tracks: initial,
            ids,
            remote,
            local,
        }
    }

    fn load_local(local: &mut dyn FavoritesBackend) -> Vec<Track> {
        local.load().unwrap_or_else(|e| {
            warn!(error = %e, "Local favorites load failed, starting empty");
            Vec::new()
        })
    }

    /// Whether the track with this id is liked
    pub fn is_liked(&self, track_id: &str) -> bool {
        self.ids.contains(track_id)
    }

    /// Liked tracks, oldest like first
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of liked tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether nothing is liked
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Flip the liked state of a track.
    ///
    /// The in-memory set mutates synchronously and stays authoritative;
    /// persistence (remote when present, local otherwise) is best-effort.
    /// Returns the new liked state.
    pub fn toggle(&mut self, track: &Track) -> bool {
        let now_liked = if self.ids.remove(&track.id) {
            self.tracks.retain(|t| t.id != track.id);
            false
        } else {
            self.ids.insert(track.id.clone());
            self.tracks.push(track.clone());
            true
        };

        let result = match self.remote.as_mut() {
            Some(backend) => {
                if now_liked {
                    backend.insert(track)
                } else {
                    backend.remove(&track.id)
                }
            }
            None => {
                if now_liked {
                    self.local.insert(track)
                } else {
                    self.local.remove(&track.id)
                }
            }
        };

        if let Err(e) = result {
            warn!(track_id = %track.id, error = %e, "Failed to persist like toggle");
        }

        now_liked
    }
}
