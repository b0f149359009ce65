//! Core types for playback management

use aria_core::types::Track;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the queue ends
    Off,

    /// Loop the entire queue
    All,

    /// Loop the current track only
    One,
}

impl RepeatMode {
    /// Next mode in the user-facing cycle: off -> all -> one -> off
    pub fn cycled(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }
}

/// Configuration for the playback facade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0.0-1.0, default: 0.5)
    pub volume: f32,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Minimum wall-clock time between listening-minute flushes
    /// (default: 30 seconds)
    pub flush_interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 0.5,
            shuffle: false,
            repeat: RepeatMode::Off,
            flush_interval: Duration::from_secs(30),
        }
    }
}

/// One coherent view of playback state.
///
/// Built fresh on every read so consumers never observe a half-applied
/// transition; in particular `playing` is never true without a current
/// track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    /// Currently selected track, if any
    pub current_track: Option<Track>,

    /// Whether playback is running
    pub playing: bool,

    /// Playback position in seconds
    pub position: f64,

    /// Track duration in seconds (0.0 until the backend reports it)
    pub duration: f64,

    /// Volume (0.0-1.0)
    pub volume: f32,

    /// Shuffle state
    pub shuffle: bool,

    /// Repeat mode
    pub repeat: RepeatMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_mode_cycles() {
        assert_eq!(RepeatMode::Off.cycled(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycled(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycled(), RepeatMode::Off);
    }

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.volume, 0.5);
        assert!(!config.shuffle);
        assert_eq!(config.repeat, RepeatMode::Off);
        assert_eq!(config.flush_interval, Duration::from_secs(30));
    }
}
