//! Local liked-tracks persistence
//!
//! The fallback favorites backend used when a session has no
//! authenticated identity. The liked set is stored as one JSON array
//! under a single key, written through on every mutation.

use crate::error::Result;
use crate::store::LocalStore;
use aria_core::traits::FavoritesBackend;
use aria_core::types::Track;
use std::path::PathBuf;

const LIKED_TRACKS_KEY: &str = "liked_tracks";

/// Liked-tracks persistence over a [`LocalStore`]
#[derive(Debug)]
pub struct LocalFavorites {
    store: LocalStore,
}

impl LocalFavorites {
    /// Open (or create) the favorites store at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            store: LocalStore::open(path)?,
        })
    }

    fn read(&self) -> Result<Vec<Track>> {
        match self.store.get(LIKED_TRACKS_KEY) {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&mut self, tracks: &[Track]) -> Result<()> {
        let json = serde_json::to_string(tracks)?;
        self.store.set(LIKED_TRACKS_KEY, json)
    }
}

impl FavoritesBackend for LocalFavorites {
    fn load(&mut self) -> aria_core::Result<Vec<Track>> {
        Ok(self.read()?)
    }

    fn insert(&mut self, track: &Track) -> aria_core::Result<()> {
        let mut tracks = self.read()?;
        if !tracks.iter().any(|t| t.id == track.id) {
            tracks.push(track.clone());
            self.write(&tracks)?;
        }
        Ok(())
    }

    fn remove(&mut self, track_id: &str) -> aria_core::Result<()> {
        let mut tracks = self.read()?;
        let before = tracks.len();
        tracks.retain(|t| t.id != track_id);
        if tracks.len() != before {
            self.write(&tracks)?;
        }
        Ok(())
    }
}
