//! Recent AI playlist persistence
//!
//! Keeps the last few AI-generated playlists locally so they survive a
//! reload even without an identity. Bounded and most-recent-first.

use crate::error::Result;
use crate::store::LocalStore;
use aria_core::types::Track;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const RECENT_PLAYLISTS_KEY: &str = "recent_ai_playlists";

/// How many recent playlists are retained
pub const MAX_RECENT_PLAYLISTS: usize = 8;

/// One saved AI-generated playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlaylist {
    /// Display name
    pub name: String,

    /// The prompt the playlist was generated from
    pub prompt: String,

    /// Resolved tracks in playlist order
    pub tracks: Vec<Track>,

    /// When the playlist was generated
    pub created_at: DateTime<Utc>,
}

/// Bounded most-recent-first playlist store over a [`LocalStore`]
#[derive(Debug)]
pub struct RecentPlaylists {
    store: LocalStore,
}

impl RecentPlaylists {
    /// Open (or create) the recent-playlists store at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            store: LocalStore::open(path)?,
        })
    }

    /// Saved playlists, most recent first
    pub fn list(&self) -> Result<Vec<SavedPlaylist>> {
        match self.store.get(RECENT_PLAYLISTS_KEY) {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Save a playlist at the front, dropping the oldest beyond the cap
    pub fn push(&mut self, playlist: SavedPlaylist) -> Result<()> {
        let mut playlists = self.list()?;
        playlists.insert(0, playlist);
        playlists.truncate(MAX_RECENT_PLAYLISTS);
        let json = serde_json::to_string(&playlists)?;
        self.store.set(RECENT_PLAYLISTS_KEY, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_core::types::SourceRef;

    fn playlist(name: &str) -> SavedPlaylist {
        SavedPlaylist {
            name: name.to_string(),
            prompt: "upbeat synthwave for a night drive".to_string(),
            tracks: vec![Track::new(
                "1",
                "Night Drive",
                "Neon Fields",
                SourceRef::Url("http://x".into()),
            )],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn most_recent_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut recents = RecentPlaylists::open(dir.path().join("p.json")).unwrap();

        recents.push(playlist("first")).unwrap();
        recents.push(playlist("second")).unwrap();

        let names: Vec<String> = recents.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn bounded_at_the_cap() {
        let dir = tempfile::tempdir().unwrap();
        let mut recents = RecentPlaylists::open(dir.path().join("p.json")).unwrap();

        for i in 0..(MAX_RECENT_PLAYLISTS + 3) {
            recents.push(playlist(&format!("mix {i}"))).unwrap();
        }

        let saved = recents.list().unwrap();
        assert_eq!(saved.len(), MAX_RECENT_PLAYLISTS);
        // Newest kept, oldest dropped
        assert_eq!(saved[0].name, format!("mix {}", MAX_RECENT_PLAYLISTS + 2));
    }

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.json");

        let mut recents = RecentPlaylists::open(&path).unwrap();
        recents.push(playlist("kept")).unwrap();
        drop(recents);

        let recents = RecentPlaylists::open(&path).unwrap();
        assert_eq!(recents.list().unwrap()[0].name, "kept");
    }
}
