//! Playback engine - core state machine
//!
//! Owns the queue, transport state (current track, play/pause, position,
//! duration, volume) and the shuffle/repeat policy, and drives the media
//! backend through the readiness-gating adapter. Engine state is the
//! single source of truth; backend events reconcile it, and events
//! belonging to a superseded load are discarded by generation token.

use crate::adapter::{AdapterEvent, AdapterEventKind, BackendAdapter, MediaBackend, PlayerState};
use crate::events::PlaybackEvent;
use crate::queue::Queue;
use crate::types::{PlaybackConfig, RepeatMode};
use aria_core::types::Track;
use rand::Rng;
use tracing::{debug, warn};

/// Central playback state machine
pub struct PlaybackEngine {
    adapter: BackendAdapter,
    queue: Queue,
    current: Option<Track>,
    playing: bool,
    position: f64,
    duration: f64,
    volume: f32,
    shuffle: bool,
    repeat: RepeatMode,

    /// Monotonic load token; backend events carrying an older value are
    /// from a superseded load and get discarded
    generation: u64,

    /// Consecutive failed loads since the last successful start; when it
    /// reaches the queue length, auto-skip stops instead of cycling
    load_failures: usize,

    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackEngine {
    /// Create an engine over a media backend
    pub fn new(backend: Box<dyn MediaBackend>, config: &PlaybackConfig) -> Self {
        let volume = config.volume.clamp(0.0, 1.0);
        let mut adapter = BackendAdapter::new(backend);
        adapter.set_volume(volume);

        Self {
            adapter,
            queue: Queue::new(),
            current: None,
            playing: false,
            position: 0.0,
            duration: 0.0,
            volume,
            shuffle: config.shuffle,
            repeat: config.repeat,
            generation: 0,
            load_failures: 0,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Play a specific track.
    ///
    /// Playing the track that is already current toggles play/pause.
    /// Otherwise the track becomes current (appended to the queue first if
    /// its id is not queued yet) and a fresh load is issued.
    pub fn play_track(&mut self, track: Track) {
        if self.current.as_ref().is_some_and(|c| c.id == track.id) {
            self.toggle_play();
            return;
        }

        if self.queue.push_unique(track.clone()) {
            self.emit_queue_changed();
        }
        self.load_failures = 0;
        self.start_track(track);
    }

    /// Flip play/pause. No-op without a current track.
    pub fn toggle_play(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.playing = !self.playing;
        if self.playing {
            self.adapter.play();
        } else {
            self.adapter.pause();
        }
        self.emit_state_changed();
    }

    /// Advance to the next track.
    ///
    /// With shuffle on, a uniformly random queue index is picked; when the
    /// pick lands on the current index (and more than one track is queued)
    /// the following index is used instead, so shuffle never repeats the
    /// current track by construction. With shuffle off, advance wraps
    /// modulo the queue length, except that reaching the end with repeat
    /// off stops playback instead of wrapping. No-op on an empty queue.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        let len = self.queue.len();
        let current_index = self
            .current
            .as_ref()
            .and_then(|t| self.queue.position_of(&t.id));

        let target = if self.shuffle {
            let pick = rand::thread_rng().gen_range(0..len);
            match current_index {
                Some(index) if len > 1 && pick == index => (pick + 1) % len,
                _ => pick,
            }
        } else {
            match current_index {
                Some(index) => {
                    if index + 1 == len && self.repeat == RepeatMode::Off {
                        // End of queue: stop rather than wrap
                        self.playing = false;
                        self.adapter.pause();
                        self.emit_state_changed();
                        return;
                    }
                    (index + 1) % len
                }
                None => 0,
            }
        };

        if let Some(track) = self.queue.get(target).cloned() {
            self.start_track(track);
        }
    }

    /// Go to the previous track. Always wraps, regardless of shuffle or
    /// repeat mode. No-op on an empty queue.
    pub fn previous(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        let len = self.queue.len();
        let index = self
            .current
            .as_ref()
            .and_then(|t| self.queue.position_of(&t.id))
            .unwrap_or(0);
        let target = (index + len - 1) % len;

        if let Some(track) = self.queue.get(target).cloned() {
            self.load_failures = 0;
            self.start_track(track);
        }
    }

    /// Seek within the current track.
    ///
    /// The stored position updates immediately rather than waiting for the
    /// backend's next time tick, so reads reflect the seek at once.
    /// No-op without a current track.
    pub fn seek(&mut self, seconds: f64) {
        if self.current.is_none() {
            return;
        }
        let seconds = if self.duration > 0.0 {
            seconds.clamp(0.0, self.duration)
        } else {
            seconds.max(0.0)
        };
        self.adapter.seek(seconds);
        self.position = seconds;
    }

    /// Set volume, clamped to 0.0-1.0
    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.volume = volume;
        self.adapter.set_volume(volume);
        self.pending_events
            .push(PlaybackEvent::VolumeChanged { volume });
    }

    // ===== Policy =====

    /// Toggle shuffle. Pure policy change, current playback unaffected.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    /// Cycle repeat mode: off -> all -> one -> off
    pub fn cycle_repeat(&mut self) {
        self.repeat = self.repeat.cycled();
    }

    // ===== Queue Management =====

    /// Append a track unconditionally (duplicates permitted, unlike
    /// `play_track`'s dedupe-on-append)
    pub fn enqueue(&mut self, track: Track) {
        self.queue.push(track);
        self.emit_queue_changed();
    }

    /// Replace the whole queue. Current track and play state are left
    /// alone.
    pub fn replace_queue(&mut self, tracks: Vec<Track>) {
        self.queue.replace(tracks);
        self.emit_queue_changed();
    }

    // ===== Backend Events =====

    /// Apply a backend event to engine state.
    ///
    /// Readiness is player-level and always honoured (it flushes commands
    /// deferred by the adapter). Everything else is load-scoped: events
    /// whose generation is not the engine's current one belong to a
    /// superseded load and are dropped.
    pub fn handle_event(&mut self, event: AdapterEvent) {
        if matches!(event.kind, AdapterEventKind::Ready) {
            self.adapter.handle_ready();
            return;
        }

        if event.generation != self.generation {
            warn!(
                stale = event.generation,
                current = self.generation,
                "Discarding stale backend event"
            );
            return;
        }

        match event.kind {
            AdapterEventKind::Ready => {}
            AdapterEventKind::TimeTick(seconds) => {
                self.position = if self.duration > 0.0 {
                    seconds.min(self.duration)
                } else {
                    seconds
                };
                self.pending_events.push(PlaybackEvent::PositionUpdate {
                    position: self.position,
                    duration: self.duration,
                });
            }
            AdapterEventKind::DurationKnown(seconds) => {
                self.duration = seconds.max(0.0);
                if self.duration > 0.0 && self.position > self.duration {
                    self.position = self.duration;
                }
            }
            AdapterEventKind::StateChanged(state) => self.handle_player_state(state),
            AdapterEventKind::LoadFailed(message) => self.handle_load_failure(&message),
        }
    }

    fn handle_player_state(&mut self, state: PlayerState) {
        match state {
            PlayerState::Ended => {
                if let Some(track) = &self.current {
                    self.pending_events.push(PlaybackEvent::TrackFinished {
                        track_id: track.id.clone(),
                    });
                }
                if self.repeat == RepeatMode::One {
                    // Replay in place; queue advancement is bypassed
                    // entirely and the backend resets its own position
                    self.position = 0.0;
                    self.playing = true;
                    self.adapter.play();
                    self.emit_state_changed();
                } else {
                    self.next();
                }
            }
            PlayerState::Playing => {
                self.load_failures = 0;
                if !self.playing {
                    self.playing = true;
                    self.emit_state_changed();
                }
            }
            PlayerState::Paused => {
                if self.playing {
                    self.playing = false;
                    self.emit_state_changed();
                }
            }
            PlayerState::Unstarted | PlayerState::Buffering | PlayerState::Cued => {}
        }
    }

    fn handle_load_failure(&mut self, message: &str) {
        warn!(error = message, "Backend failed to load track");
        self.pending_events.push(PlaybackEvent::Error {
            message: message.to_string(),
        });

        self.load_failures += 1;
        if self.load_failures >= self.queue.len().max(1) {
            // Every queue entry failed in a row; stop instead of cycling
            self.playing = false;
            self.emit_state_changed();
            return;
        }
        self.next();
    }

    // ===== State Queries =====

    /// Currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Playback position in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Duration in seconds (0.0 until the backend reports it)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Current volume (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Shuffle state
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Queued tracks in order
    pub fn queue_tracks(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Drain pending UI events
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Tear down the backend (stops its polling timer) and halt playback
    pub fn shutdown(&mut self) {
        self.adapter.shutdown();
        if self.playing {
            self.playing = false;
            self.emit_state_changed();
        }
    }

    // ===== Internal =====

    /// Make `track` current and issue a fresh load under a new generation.
    /// The caller is responsible for any queue bookkeeping.
    fn start_track(&mut self, track: Track) {
        let previous_track_id = self.current.as_ref().map(|t| t.id.clone());

        self.current = Some(track.clone());
        self.playing = true;
        self.position = 0.0;
        self.duration = 0.0;
        self.generation += 1;

        debug!(track_id = %track.id, generation = self.generation, "Loading track");
        self.adapter.load(&track.source, self.generation);
        self.adapter.play();

        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: track.id,
            previous_track_id,
        });
        self.emit_state_changed();
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::StateChanged {
            playing: self.playing,
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}
