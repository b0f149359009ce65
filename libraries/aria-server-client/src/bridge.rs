//! Synchronous bridges to the playback-core boundary traits.
//!
//! The playback core is single-threaded and never awaits a remote write;
//! these adapters put the async client behind the core's synchronous
//! traits. Writes that the core fires and forgets are spawned onto the
//! runtime; calls whose success the core must observe (the boot load, the
//! minute flush) block on the runtime handle and therefore must be driven
//! from a host thread outside the async runtime — the same thread the
//! embedding layer runs its clock loop on.

use crate::error::Result as ClientResult;
use crate::favorites::FavoritesClient;
use crate::profile::ProfileClient;
use aria_core::traits::{FavoritesBackend, ListeningSink};
use aria_core::types::Track;
use aria_core::Result;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::warn;

/// Remote favorites persistence behind the synchronous
/// [`FavoritesBackend`] trait.
pub struct RemoteFavorites {
    client: Arc<FavoritesClient>,
    runtime: Handle,
}

impl RemoteFavorites {
    /// Wrap a favorites client; `runtime` is where writes are spawned.
    pub fn new(client: FavoritesClient, runtime: Handle) -> Self {
        Self {
            client: Arc::new(client),
            runtime,
        }
    }
}

impl FavoritesBackend for RemoteFavorites {
    /// Blocking round-trip. Must not be called from inside the async
    /// runtime; session boot runs on the host thread.
    fn load(&mut self) -> Result<Vec<Track>> {
        let loaded: ClientResult<Vec<Track>> = self.runtime.block_on(self.client.list());
        Ok(loaded?)
    }

    fn insert(&mut self, track: &Track) -> Result<()> {
        let client = self.client.clone();
        let track = track.clone();
        self.runtime.spawn(async move {
            if let Err(e) = client.insert(&track).await {
                warn!(track_id = %track.id, error = %e, "Remote like insert failed");
            }
        });
        Ok(())
    }

    fn remove(&mut self, track_id: &str) -> Result<()> {
        let client = self.client.clone();
        let track_id = track_id.to_string();
        self.runtime.spawn(async move {
            if let Err(e) = client.delete(&track_id).await {
                warn!(track_id = %track_id, error = %e, "Remote like delete failed");
            }
        });
        Ok(())
    }
}

/// Remote listening-minutes sink behind the synchronous
/// [`ListeningSink`] trait.
///
/// The flush is blocking because the accumulator only clears its counter
/// once the write is known to have succeeded.
pub struct RemoteListening {
    client: Arc<ProfileClient>,
    runtime: Handle,
}

impl RemoteListening {
    /// Wrap a profile client.
    pub fn new(client: ProfileClient, runtime: Handle) -> Self {
        Self {
            client: Arc::new(client),
            runtime,
        }
    }
}

impl ListeningSink for RemoteListening {
    fn add_minutes(&mut self, minutes: u64) -> Result<()> {
        let outcome: ClientResult<()> = self.runtime.block_on(self.client.add_minutes(minutes));
        Ok(outcome?)
    }
}
