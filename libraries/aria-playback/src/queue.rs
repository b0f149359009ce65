//! Playback queue
//!
//! Insertion-ordered sequence of tracks, owned exclusively by the engine.
//! The only mutations are append (with or without an existence check) and
//! wholesale replacement; there is no arbitrary reorder or removal.

use aria_core::types::Track;

/// Ordered queue of tracks under playback control
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
}

impl Queue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Append a track unconditionally (duplicates permitted)
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Append a track unless one with the same id is already queued.
    ///
    /// Returns true when the track was added.
    pub fn push_unique(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Replace the whole queue
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    /// Whether a track with this id is queued
    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|t| t.id == track_id)
    }

    /// Index of the track with this id
    pub fn position_of(&self, track_id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == track_id)
    }

    /// Track at index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All queued tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
