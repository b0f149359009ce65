//! Aria Player - Local Storage
//!
//! Local durable fallback for Aria Player sessions without a remote
//! identity (and for state that is local by design). Persistence is a
//! small JSON key-value file in the spirit of browser local storage:
//! read once on open, written through on every mutation.
//!
//! This crate provides:
//! - [`LocalStore`]: the JSON string key-value file
//! - [`LocalFavorites`]: liked-tracks persistence implementing the core
//!   `FavoritesBackend` trait
//! - [`RecentPlaylists`]: a bounded most-recent-first list of saved AI
//!   playlists

#![forbid(unsafe_code)]

pub mod error;
pub mod favorites;
pub mod playlists;
pub mod store;

pub use error::{Result, StorageError};
pub use favorites::LocalFavorites;
pub use playlists::{RecentPlaylists, SavedPlaylist};
pub use store::LocalStore;
