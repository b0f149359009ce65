//! Playback events
//!
//! Event-based communication for UI synchronization. The engine pushes
//! events into a pending buffer; the embedding layer drains it after each
//! command or backend callback and forwards the events to the UI.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Play/pause state changed
    StateChanged {
        /// Whether playback is now running
        playing: bool,
    },

    /// The current track changed
    TrackChanged {
        /// Id of the new current track
        track_id: String,
        /// Id of the previous track, if any
        previous_track_id: Option<String>,
    },

    /// A track finished playing naturally
    TrackFinished {
        /// Id of the finished track
        track_id: String,
    },

    /// Periodic position report
    PositionUpdate {
        /// Current position in seconds
        position: f64,
        /// Duration in seconds (0.0 while unknown)
        duration: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume (0.0-1.0)
        volume: f32,
    },

    /// Queue contents changed
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// A non-fatal playback error occurred
    Error {
        /// Human-readable description
        message: String,
    },
}
