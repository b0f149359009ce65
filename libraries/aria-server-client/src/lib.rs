//! Aria Player - Server Client
//!
//! HTTP client for the Aria profile service (auth, profiles with
//! listening minutes, liked tracks, playlists) and the external track
//! catalog, plus the synchronous bridge types that put both behind the
//! playback core's boundary traits.
//!
//! Remote persistence is strictly best-effort from the player's point of
//! view: failures degrade (local fallback, retained counters, logged
//! writes), they are never surfaced to the UI as fatal.

#![forbid(unsafe_code)]

pub mod auth;
pub mod bridge;
pub mod catalog;
pub mod client;
pub mod error;
pub mod favorites;
pub mod playlists;
pub mod profile;
pub mod types;

pub use bridge::{RemoteFavorites, RemoteListening};
pub use catalog::CatalogClient;
pub use client::AriaServerClient;
pub use error::{Result, ServerClientError};
pub use favorites::FavoritesClient;
pub use playlists::PlaylistsClient;
pub use profile::ProfileClient;
pub use types::{LoginResponse, PlaylistRecord, ServerConfig};
