//! Media backend adapter
//!
//! Wraps the embedded third-party player the UI ships with. The player
//! initializes asynchronously and may not accept commands yet when the
//! engine first issues them, so [`BackendAdapter`] gates every command on
//! readiness: commands issued early are recorded and re-applied once the
//! backend signals ready, never raised as errors.

use aria_core::types::SourceRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lifecycle states reported by the embedded player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Player created, nothing started yet
    Unstarted,

    /// Current media finished playing
    Ended,

    /// Playing
    Playing,

    /// Paused mid-track
    Paused,

    /// Buffering
    Buffering,

    /// Media cued but not started
    Cued,
}

/// Asynchronous notification from the media backend.
///
/// `generation` ties the event to the load it belongs to; the engine
/// discards events whose generation does not match its current one, which
/// is how callbacks from superseded loads are cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterEvent {
    /// Generation of the load this event belongs to
    pub generation: u64,

    /// What happened
    pub kind: AdapterEventKind,
}

/// Kinds of backend notification
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterEventKind {
    /// The player finished initializing and accepts commands
    Ready,

    /// The player's lifecycle state changed
    StateChanged(PlayerState),

    /// Periodic playback-position report in seconds (roughly every 100 ms
    /// while media is loaded)
    TimeTick(f64),

    /// The media's duration became known, in seconds
    DurationKnown(f64),

    /// The requested media could not be loaded
    LoadFailed(String),
}

/// The embedded media player boundary.
///
/// Commands are fire-and-forget: the player has no synchronous error
/// channel, failures come back as [`AdapterEvent`]s. Implementations own
/// the position-polling timer (roughly 100 ms while media is loaded) and
/// must stop it on `shutdown` so no timer outlives the player.
pub trait MediaBackend: Send {
    /// Load media, tagging subsequent events with `generation`
    fn load(&mut self, source: &SourceRef, generation: u64);

    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Seek to a position in seconds
    fn seek(&mut self, seconds: f64);

    /// Set volume (0.0-1.0)
    fn set_volume(&mut self, volume: f32);

    /// Tear the player down, stopping any polling timers
    fn shutdown(&mut self);
}

/// Readiness gate in front of a [`MediaBackend`].
///
/// Until the backend reports ready, load/seek are held and volume and the
/// play/pause intent are recorded; [`BackendAdapter::handle_ready`]
/// re-applies all of it. Desired volume and play state are kept across
/// readiness so the engine can re-assert them at any time.
pub struct BackendAdapter {
    backend: Box<dyn MediaBackend>,
    ready: bool,
    pending_load: Option<(SourceRef, u64)>,
    pending_seek: Option<f64>,
    desired_volume: Option<f32>,
    desired_playing: Option<bool>,
}

impl BackendAdapter {
    /// Wrap a backend, assumed not ready until it says otherwise
    pub fn new(backend: Box<dyn MediaBackend>) -> Self {
        Self {
            backend,
            ready: false,
            pending_load: None,
            pending_seek: None,
            desired_volume: None,
            desired_playing: None,
        }
    }

    /// Whether the backend has reported ready
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Load media now, or as soon as the backend is ready
    pub fn load(&mut self, source: &SourceRef, generation: u64) {
        // A newer load supersedes any still-pending one
        self.pending_seek = None;
        if self.ready {
            self.backend.load(source, generation);
        } else {
            debug!(generation, "Backend not ready, deferring load");
            self.pending_load = Some((source.clone(), generation));
        }
    }

    /// Request playback
    pub fn play(&mut self) {
        self.desired_playing = Some(true);
        if self.ready {
            self.backend.play();
        }
    }

    /// Request pause
    pub fn pause(&mut self) {
        self.desired_playing = Some(false);
        if self.ready {
            self.backend.pause();
        }
    }

    /// Seek, or remember the position for when the backend is ready
    pub fn seek(&mut self, seconds: f64) {
        if self.ready {
            self.backend.seek(seconds);
        } else {
            self.pending_seek = Some(seconds);
        }
    }

    /// Set volume, remembered for re-assertion on readiness
    pub fn set_volume(&mut self, volume: f32) {
        self.desired_volume = Some(volume);
        if self.ready {
            self.backend.set_volume(volume);
        }
    }

    /// The backend signalled readiness: re-issue everything deferred.
    ///
    /// Order matters: volume before the load so the first audible frame is
    /// already at the desired level, play/pause last so it applies to the
    /// freshly loaded media.
    pub fn handle_ready(&mut self) {
        self.ready = true;

        if let Some(volume) = self.desired_volume {
            self.backend.set_volume(volume);
        }
        if let Some((source, generation)) = self.pending_load.take() {
            debug!(generation, "Backend ready, issuing deferred load");
            self.backend.load(&source, generation);
        }
        if let Some(seconds) = self.pending_seek.take() {
            self.backend.seek(seconds);
        }
        match self.desired_playing {
            Some(true) => self.backend.play(),
            Some(false) => self.backend.pause(),
            None => {}
        }
    }

    /// Tear down the backend and drop anything deferred
    pub fn shutdown(&mut self) {
        self.backend.shutdown();
        self.ready = false;
        self.pending_load = None;
        self.pending_seek = None;
        self.desired_playing = None;
    }
}
