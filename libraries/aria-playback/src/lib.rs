//! Aria Player - Playback Management
//!
//! Backend-agnostic playback management for Aria Player.
//!
//! This crate provides:
//! - Queue management (insertion-ordered, dedupe-on-play)
//! - Transport state (current track, play/pause, position, duration, volume)
//! - Shuffle and repeat policy (Off, All, One)
//! - Like/favorites store with remote-or-local persistence
//! - Listening-time accumulation with periodic best-effort flushing
//! - A facade surfacing everything as one consistent snapshot
//!
//! # Architecture
//!
//! `aria-playback` never talks to the network or decodes audio. Actual
//! playback is delegated to an embedded third-party player behind the
//! [`MediaBackend`] trait, which initializes asynchronously and reports
//! back through [`AdapterEvent`]s. The engine is a synchronous state
//! machine driven from a single logical timeline: user commands, backend
//! events, and clock ticks are applied in arrival order, and a generation
//! token discards callbacks from superseded track loads.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_core::types::{SourceRef, Track};
//! use aria_playback::{MediaBackend, PlaybackConfig, Player, SessionStores};
//!
//! # fn backend() -> Box<dyn MediaBackend> { unimplemented!() }
//! # fn stores() -> SessionStores { unimplemented!() }
//! let mut player = Player::new(backend(), PlaybackConfig::default(), stores());
//!
//! let track = Track::new(
//!     "1",
//!     "Night Drive",
//!     "Neon Fields",
//!     SourceRef::EmbedId("abc123".into()),
//! );
//! player.play_track(track);
//!
//! // The embedding layer forwards backend events and a 1 Hz clock:
//! // player.handle_adapter_event(event);
//! // player.clock_tick(std::time::Instant::now());
//!
//! let snapshot = player.snapshot();
//! assert!(snapshot.playing);
//! ```

#![forbid(unsafe_code)]

pub mod adapter;
pub mod engine;
pub mod events;
pub mod facade;
pub mod likes;
pub mod listening;
pub mod queue;
pub mod types;

// Public exports
pub use adapter::{AdapterEvent, AdapterEventKind, BackendAdapter, MediaBackend, PlayerState};
pub use engine::PlaybackEngine;
pub use events::PlaybackEvent;
pub use facade::{Player, SessionStores};
pub use likes::LikeStore;
pub use listening::ListenTimer;
pub use queue::Queue;
pub use types::{PlaybackConfig, PlayerSnapshot, RepeatMode};
