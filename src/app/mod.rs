//! Application runtime
//!
//! `App` owns the pure `Model` plus everything that performs I/O: the
//! preferences store and the bookmarks fetch worker.
//!
//! - bookmarks: dependency tracking and fetch outcomes
//! - actions: bookmark, network, account and selection actions
//! - sorting: table ordering with selection preservation

mod actions;
mod bookmarks;
mod sorting;

pub use actions::MAX_PROMPT_CHARS;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::api::AquariusClient;
use crate::config::Config;
use crate::model::{FetchOutcome, Model, SessionModel};
use crate::prefs::PreferencesDb;
use crate::services::{AccessDetailsProvider, AssetResolver, BookmarksFetcher, SubgraphClient};

pub struct App {
    pub model: Model,
    pub config: Config,

    prefs: PreferencesDb,
    fetcher: BookmarksFetcher,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl App {
    /// Build an app from explicit collaborators
    ///
    /// Must run inside a tokio runtime: the first fetch is issued right away
    /// when bookmarks exist.
    pub fn new(
        config: Config,
        prefs: PreferencesDb,
        resolver: Arc<dyn AssetResolver>,
        access: Arc<dyn AccessDetailsProvider>,
        account_id: Option<String>,
    ) -> Result<Self> {
        prefs.init_chain_ids(&config.default_chain_ids)?;

        let (fetcher, outcome_rx) = BookmarksFetcher::new(resolver, access);
        let session = SessionModel::new(
            config.known_accounts(),
            account_id.or_else(|| config.account_id.clone()),
        );

        let mut app = App {
            model: Model::new(session),
            config,
            prefs,
            fetcher,
            outcome_rx,
        };

        app.sync_bookmarks();
        Ok(app)
    }

    /// Build the app against the configured metadata cache and subgraphs,
    /// with preferences stored on disk
    pub fn from_config(config: Config, account_id: Option<String>) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let resolver = AquariusClient::new(config.metadata_cache_uri().unwrap_or_default(), timeout)?;
        let access = SubgraphClient::new(config.subgraph_uris.clone(), timeout)?;
        let prefs = PreferencesDb::new()?;

        Self::new(config, prefs, Arc::new(resolver), Arc::new(access), account_id)
    }

    pub fn prefs(&self) -> &PreferencesDb {
        &self.prefs
    }

    /// Apply finished fetches (non-blocking)
    pub fn process_fetch_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.handle_fetch_outcome(outcome);
        }
    }

    /// Wait for the next fetch outcome and apply it
    ///
    /// Returns false when no outcome can arrive any more.
    pub async fn wait_for_fetch(&mut self) -> bool {
        match self.outcome_rx.recv().await {
            Some(outcome) => {
                self.handle_fetch_outcome(outcome);
                true
            }
            None => false,
        }
    }

    /// Per-frame housekeeping: pick up dependency changes, apply outcomes,
    /// expire the toast
    pub fn tick(&mut self) {
        self.sync_bookmarks();
        self.process_fetch_outcomes();

        if self.model.ui.should_dismiss_toast() {
            self.model.ui.dismiss_toast();
        }
    }
}
