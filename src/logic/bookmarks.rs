//! Bookmarks view rules
//!
//! Pure functions deciding when a fetch may run and which resolved records
//! end up on screen.

use std::collections::HashMap;

use crate::api::AssetExtended;
use crate::model::BookmarkDeps;

pub const NO_NETWORK_MESSAGE: &str = "No network selected";
pub const NO_BOOKMARKS_MESSAGE: &str = "Your bookmarks will appear here.";

/// A fetch needs an endpoint, at least one bookmark, and at least one network
pub fn should_fetch(deps: &BookmarkDeps) -> bool {
    let has_endpoint = deps
        .metadata_cache_uri
        .as_deref()
        .map(|uri| !uri.trim().is_empty())
        .unwrap_or(false);

    has_endpoint && !deps.bookmarks.is_empty() && !deps.chain_ids.is_empty()
}

/// Restrict resolved records to pinned DIDs on selected chains, in pinned order
///
/// Records without a datatoken are dropped, as are repeated DIDs.
pub fn visible_records(
    records: Vec<AssetExtended>,
    bookmarks: &[String],
    chain_ids: &[u64],
) -> Vec<AssetExtended> {
    let positions: HashMap<&str, usize> = bookmarks
        .iter()
        .enumerate()
        .rev()
        .map(|(idx, did)| (did.as_str(), idx))
        .collect();

    let mut visible: Vec<(usize, AssetExtended)> = Vec::with_capacity(records.len());
    for record in records {
        let Some(&pos) = positions.get(record.did()) else {
            continue;
        };
        if !chain_ids.contains(&record.asset.chain_id) || record.asset.first_datatoken().is_none() {
            continue;
        }
        if visible.iter().any(|(p, _)| *p == pos) {
            continue;
        }
        visible.push((pos, record));
    }

    visible.sort_by_key(|(pos, _)| *pos);
    visible.into_iter().map(|(_, record)| record).collect()
}

/// Message for an empty table, decided only by the network scope
pub fn empty_message(chain_ids: &[u64]) -> &'static str {
    if chain_ids.is_empty() {
        NO_NETWORK_MESSAGE
    } else {
        NO_BOOKMARKS_MESSAGE
    }
}
