//! Bookmarks fetch orchestration
//!
//! Turns preference/session/config state into a dependency snapshot, hands
//! fetch decisions to the worker, and applies outcomes to the model.

use anyhow::Result;
use tracing::{debug, error};

use crate::logic::errors::{classify_error, format_error_message};
use crate::model::{Applied, BookmarkDeps, FetchDecision, FetchOutcome};
use crate::App;

impl App {
    /// Snapshot of everything the bookmarks fetch depends on
    pub fn current_deps(&self) -> Result<BookmarkDeps> {
        Ok(BookmarkDeps {
            metadata_cache_uri: self.config.metadata_cache_uri(),
            bookmarks: self.prefs.bookmarks()?,
            chain_ids: self.prefs.chain_ids()?,
            account_id: self.model.session.account_id.clone(),
        })
    }

    /// Re-run the fetch if any dependency changed since the last call
    pub fn sync_bookmarks(&mut self) {
        let deps = match self.current_deps() {
            Ok(deps) => deps,
            Err(e) => {
                error!("Failed to read preferences: {:#}", e);
                return;
            }
        };

        match self.model.bookmarks.begin(deps) {
            FetchDecision::Unchanged => {}
            FetchDecision::Skip => {
                self.fetcher.cancel();
                self.model.clamp_selection();
            }
            FetchDecision::Fetch(request) => self.fetcher.issue(request),
        }
    }

    /// Fetch again even though nothing changed
    pub fn refresh_bookmarks(&mut self) {
        self.model.bookmarks.invalidate();
        self.sync_bookmarks();
    }

    pub fn handle_fetch_outcome(&mut self, outcome: FetchOutcome) {
        let generation = outcome.generation;
        let selected_did = self.model.selected_asset().map(|a| a.did().to_string());

        match self.model.bookmarks.apply(outcome) {
            Applied::Stale => {
                debug!(generation, "ignoring result of superseded bookmarks fetch");
            }
            Applied::Displayed(count) => {
                debug!(generation, count, "bookmarks updated");
                self.sort_bookmarks(selected_did);
            }
            Applied::KeptPrevious => {
                debug!(generation, "no records resolved, keeping previous bookmarks");
            }
            Applied::Failed(e) => {
                error!(
                    generation,
                    kind = ?classify_error(&e),
                    chain = %format!("{:#}", e),
                    "Bookmarks error: {}",
                    format_error_message(&e)
                );
            }
        }
    }

    /// Generation of the fetch currently running, if any
    pub fn fetch_in_flight(&self) -> Option<u64> {
        self.fetcher
            .in_flight_generation()
            .filter(|_| self.model.bookmarks.is_loading)
    }
}
