//! Bookmarks Model
//!
//! State of the bookmarks view: the dependency snapshot the current rows were
//! fetched for, the displayed rows, the loading flag, and the fetch generation.
//!
//! Every change of the snapshot bumps the generation. Outcomes carrying an
//! older generation are stale and never touch the displayed rows.

use crate::api::AssetExtended;
use crate::logic;

/// Inputs the bookmarks fetch depends on
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookmarkDeps {
    pub metadata_cache_uri: Option<String>,
    pub bookmarks: Vec<String>,
    pub chain_ids: Vec<u64>,
    pub account_id: Option<String>,
}

/// One fetch to run: resolve `dids` on `chain_ids`, then price for `account_id`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub dids: Vec<String>,
    pub chain_ids: Vec<u64>,
    pub account_id: Option<String>,
}

#[derive(Debug)]
pub enum FetchResult {
    Resolved(Vec<AssetExtended>),
    /// Resolution returned zero records (access details were not computed)
    NoRecords,
    Failed(anyhow::Error),
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: FetchResult,
}

/// What `BookmarksModel::begin` decided for a snapshot
#[derive(Debug, PartialEq, Eq)]
pub enum FetchDecision {
    /// Same snapshot as the last one, nothing to do
    Unchanged,
    /// No fetch possible; rows were cleared and any in-flight fetch is stale
    Skip,
    Fetch(FetchRequest),
}

/// Effect of applying a fetch outcome
#[derive(Debug)]
pub enum Applied {
    /// Outcome belongs to a superseded fetch and was dropped
    Stale,
    Displayed(usize),
    /// Empty resolution, previous rows left untouched
    KeptPrevious,
    Failed(anyhow::Error),
}

#[derive(Clone, Debug, Default)]
pub struct BookmarksModel {
    /// Snapshot of the most recent `begin` call
    pub deps: Option<BookmarkDeps>,

    /// Displayed rows, in display order
    pub pinned: Vec<AssetExtended>,

    pub is_loading: bool,

    /// Generation of the most recent snapshot
    pub generation: u64,
}

impl BookmarksModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to a (possibly unchanged) dependency snapshot
    pub fn begin(&mut self, deps: BookmarkDeps) -> FetchDecision {
        if self.deps.as_ref() == Some(&deps) {
            return FetchDecision::Unchanged;
        }

        self.generation += 1;

        let decision = if logic::bookmarks::should_fetch(&deps) {
            self.is_loading = true;
            FetchDecision::Fetch(FetchRequest {
                generation: self.generation,
                dids: deps.bookmarks.clone(),
                chain_ids: deps.chain_ids.clone(),
                account_id: deps.account_id.clone(),
            })
        } else {
            self.pinned.clear();
            self.is_loading = false;
            FetchDecision::Skip
        };

        self.deps = Some(deps);
        decision
    }

    /// Forget the last snapshot so the next `begin` fetches again
    pub fn invalidate(&mut self) {
        self.deps = None;
    }

    pub fn apply(&mut self, outcome: FetchOutcome) -> Applied {
        if outcome.generation != self.generation {
            return Applied::Stale;
        }

        self.is_loading = false;

        match outcome.result {
            FetchResult::Resolved(records) => {
                let (bookmarks, chain_ids) = match self.deps {
                    Some(ref deps) => (deps.bookmarks.as_slice(), deps.chain_ids.as_slice()),
                    None => (&[][..], &[][..]),
                };
                self.pinned = logic::bookmarks::visible_records(records, bookmarks, chain_ids);
                Applied::Displayed(self.pinned.len())
            }
            FetchResult::NoRecords => Applied::KeptPrevious,
            FetchResult::Failed(error) => Applied::Failed(error),
        }
    }

    pub fn empty_message(&self) -> &'static str {
        let chain_ids = self
            .deps
            .as_ref()
            .map(|deps| deps.chain_ids.as_slice())
            .unwrap_or(&[]);
        logic::bookmarks::empty_message(chain_ids)
    }

    /// Pinned order of the current snapshot
    pub fn bookmark_order(&self) -> &[String] {
        self.deps
            .as_ref()
            .map(|deps| deps.bookmarks.as_slice())
            .unwrap_or(&[])
    }
}
