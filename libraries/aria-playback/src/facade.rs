//! Playback facade
//!
//! The single object the UI talks to. Combines the engine, the like store
//! and the listening-time accumulator behind one operation set and one
//! consistent snapshot. All collaborators are injected; nothing here
//! reaches for ambient globals.

use crate::adapter::{AdapterEvent, MediaBackend};
use crate::engine::PlaybackEngine;
use crate::events::PlaybackEvent;
use crate::likes::LikeStore;
use crate::listening::ListenTimer;
use crate::types::{PlaybackConfig, PlayerSnapshot, RepeatMode};
use aria_core::traits::{FavoritesBackend, ListeningSink};
use aria_core::types::Track;
use std::time::Instant;

/// Persistence collaborators for one session.
///
/// `favorites_remote` and `listening` are present only when the session
/// has an authenticated identity; without them likes fall back to the
/// local store and listening seconds stay in memory.
pub struct SessionStores {
    /// Remote liked-tracks persistence (identity present)
    pub favorites_remote: Option<Box<dyn FavoritesBackend>>,

    /// Local durable liked-tracks fallback
    pub favorites_local: Box<dyn FavoritesBackend>,

    /// Remote listening-minutes sink (identity present)
    pub listening: Option<Box<dyn ListeningSink>>,
}

/// Facade over the whole playback core
pub struct Player {
    engine: PlaybackEngine,
    likes: LikeStore,
    timer: ListenTimer,
    listening: Option<Box<dyn ListeningSink>>,
}

impl Player {
    /// Assemble a player for one session
    pub fn new(
        backend: Box<dyn MediaBackend>,
        config: PlaybackConfig,
        stores: SessionStores,
    ) -> Self {
        let engine = PlaybackEngine::new(backend, &config);
        let likes = LikeStore::open(stores.favorites_remote, stores.favorites_local);
        let timer = ListenTimer::new(Instant::now(), config.flush_interval);

        Self {
            engine,
            likes,
            timer,
            listening: stores.listening,
        }
    }

    // ===== Transport =====

    /// Play a track (toggles play/pause when it is already current)
    pub fn play_track(&mut self, track: Track) {
        self.engine.play_track(track);
    }

    /// Flip play/pause
    pub fn toggle_play(&mut self) {
        self.engine.toggle_play();
    }

    /// Advance to the next track
    pub fn next(&mut self) {
        self.engine.next();
    }

    /// Go to the previous track
    pub fn previous(&mut self) {
        self.engine.previous();
    }

    /// Seek within the current track
    pub fn seek(&mut self, seconds: f64) {
        self.engine.seek(seconds);
    }

    /// Set volume (clamped to 0.0-1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.engine.set_volume(volume);
    }

    /// Toggle shuffle
    pub fn toggle_shuffle(&mut self) {
        self.engine.toggle_shuffle();
    }

    /// Cycle repeat mode
    pub fn cycle_repeat(&mut self) {
        self.engine.cycle_repeat();
    }

    // ===== Queue =====

    /// Append a track to the queue
    pub fn enqueue(&mut self, track: Track) {
        self.engine.enqueue(track);
    }

    /// Replace the whole queue
    pub fn replace_queue(&mut self, tracks: Vec<Track>) {
        self.engine.replace_queue(tracks);
    }

    /// Queued tracks in order
    pub fn queue(&self) -> &[Track] {
        self.engine.queue_tracks()
    }

    // ===== Likes =====

    /// Whether a track is liked
    pub fn is_liked(&self, track_id: &str) -> bool {
        self.likes.is_liked(track_id)
    }

    /// Flip the liked state of a track; returns the new state
    pub fn toggle_like(&mut self, track: &Track) -> bool {
        self.likes.toggle(track)
    }

    /// Liked tracks, oldest like first
    pub fn liked_tracks(&self) -> &[Track] {
        self.likes.tracks()
    }

    /// Play the liked set as the queue, starting from the first like.
    /// No-op when nothing is liked.
    pub fn play_liked(&mut self) {
        let tracks = self.likes.tracks().to_vec();
        let Some(first) = tracks.first().cloned() else {
            return;
        };
        self.engine.replace_queue(tracks);
        self.engine.play_track(first);
    }

    // ===== Session plumbing =====

    /// Apply a backend event
    pub fn handle_adapter_event(&mut self, event: AdapterEvent) {
        self.engine.handle_event(event);
    }

    /// One-second clock tick from the embedding layer.
    ///
    /// Accumulates listening time only while something is actually
    /// playing, and opportunistically flushes minutes when a sink exists.
    pub fn clock_tick(&mut self, now: Instant) {
        if !self.engine.is_playing() || self.engine.current_track().is_none() {
            return;
        }
        self.timer.tick();
        if let Some(sink) = self.listening.as_mut() {
            self.timer.try_flush(now, sink.as_mut());
        }
    }

    /// Seconds listened and not yet flushed (live profile display)
    pub fn seconds_listened(&self) -> u64 {
        self.timer.seconds()
    }

    /// Drain pending UI events
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        self.engine.take_events()
    }

    /// One coherent view of playback state
    pub fn snapshot(&self) -> PlayerSnapshot {
        let current_track = self.engine.current_track().cloned();
        PlayerSnapshot {
            playing: self.engine.is_playing() && current_track.is_some(),
            position: self.engine.position(),
            duration: self.engine.duration(),
            volume: self.engine.volume(),
            shuffle: self.engine.shuffle(),
            repeat: self.engine.repeat(),
            current_track,
        }
    }

    /// Repeat mode (also part of the snapshot)
    pub fn repeat(&self) -> RepeatMode {
        self.engine.repeat()
    }

    /// End the session: one final best-effort minute flush, then backend
    /// teardown (which stops its polling timer)
    pub fn close(&mut self, now: Instant) {
        if let Some(sink) = self.listening.as_mut() {
            self.timer.flush_pending(now, sink.as_mut());
        }
        self.engine.shutdown();
    }
}
