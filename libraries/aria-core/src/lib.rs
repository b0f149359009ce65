//! Aria Player Core
//!
//! Shared types, traits, and error handling for Aria Player.
//!
//! This crate defines the domain vocabulary the other crates speak:
//! - **Domain types**: [`Track`], [`SourceRef`], [`Profile`], [`Recommendation`]
//! - **Boundary traits**: [`FavoritesBackend`], [`ListeningSink`],
//!   [`CatalogSearch`], [`Recommender`]
//! - **Error handling**: unified [`CoreError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{SourceRef, Track};
//!
//! // A track from an external catalog
//! let track = Track::new(
//!     "cat-42",
//!     "Night Drive",
//!     "Neon Fields",
//!     SourceRef::Url("https://cdn.example.com/previews/42.m4a".into()),
//! );
//!
//! // A locally created track gets a generated identifier
//! let local = Track::local(
//!     "Demo Take 3",
//!     "Me",
//!     SourceRef::EmbedId("dQw4w9WgXcQ".into()),
//! );
//! assert_ne!(track.id, local.id);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod recommend;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use error::{CoreError, Result};
pub use recommend::{generate_playlist, resolve_recommendations};
pub use traits::{CatalogSearch, FavoritesBackend, ListeningSink, Recommender};
pub use types::{Profile, Recommendation, ResolvedTrack, SourceRef, Track, UserId};
