//! Recommendation resolution
//!
//! Turns the `{title, artist, reason}` records produced by the
//! recommendation boundary into playable tracks: the local library is
//! checked first, then the catalog search boundary. Entries that match
//! neither are dropped.

use crate::error::Result;
use crate::traits::{CatalogSearch, Recommender};
use crate::types::{Recommendation, ResolvedTrack, Track};
use tracing::{debug, warn};

/// Produce a playable playlist from a free-text prompt.
///
/// Asks the recommendation boundary for suggestions, then resolves them
/// to playable tracks. Fails only when the recommender itself fails;
/// resolution degrades per entry.
pub async fn generate_playlist(
    prompt: &str,
    library: &[Track],
    recommender: &dyn Recommender,
    catalog: &dyn CatalogSearch,
) -> Result<Vec<ResolvedTrack>> {
    let recommendations = recommender.recommend(prompt, library).await?;
    debug!(count = recommendations.len(), "Recommender returned entries");
    Ok(resolve_recommendations(recommendations, library, catalog).await)
}

/// Resolve recommendations against the local library, falling back to a
/// catalog best-match lookup.
///
/// Recommendation order is preserved. Catalog failures drop the affected
/// entry only; they never abort the rest of the playlist.
pub async fn resolve_recommendations(
    recommendations: Vec<Recommendation>,
    library: &[Track],
    catalog: &dyn CatalogSearch,
) -> Vec<ResolvedTrack> {
    let mut resolved = Vec::with_capacity(recommendations.len());

    for rec in recommendations {
        if let Some(track) = find_local(&rec, library) {
            resolved.push(ResolvedTrack {
                track: track.clone(),
                reason: rec.reason,
                is_preview: false,
            });
            continue;
        }

        match catalog.best_match(&rec.title, &rec.artist).await {
            Ok(Some(track)) => resolved.push(ResolvedTrack {
                track,
                reason: rec.reason,
                is_preview: true,
            }),
            Ok(None) => {
                debug!(title = %rec.title, artist = %rec.artist, "No catalog match for recommendation");
            }
            Err(e) => {
                warn!(title = %rec.title, error = %e, "Catalog lookup failed, dropping recommendation");
            }
        }
    }

    resolved
}

/// Local-library match: an exact title hit when the recommender flagged
/// the entry as local, or a case-insensitive title + artist pair.
fn find_local<'a>(rec: &Recommendation, library: &'a [Track]) -> Option<&'a Track> {
    library.iter().find(|t| {
        (rec.is_local && t.title == rec.title)
            || (t.title.eq_ignore_ascii_case(&rec.title)
                && t.artist.eq_ignore_ascii_case(&rec.artist))
    })
}
