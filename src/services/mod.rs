//! External Services
//!
//! This module contains services that talk to external systems:
//! - bookmarks: cancellable fetch worker feeding the bookmarks view
//! - access_details: subgraph-backed pricing for resolved assets
//!
//! The view only sees the two collaborator traits below, so tests can
//! swap in fakes for the metadata cache and the pricing source.

pub mod access_details;
pub mod bookmarks;

use anyhow::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::api::{Asset, AssetExtended};

/// Turns bookmarked DIDs into full asset records
#[async_trait]
pub trait AssetResolver: Send + Sync {
    async fn resolve(
        &self,
        dids: &[String],
        chain_ids: &[u64],
        cancel: CancellationToken,
    ) -> Result<Vec<Asset>>;
}

/// Computes pricing/entitlement for resolved assets, relative to an account
#[async_trait]
pub trait AccessDetailsProvider: Send + Sync {
    async fn compute(
        &self,
        assets: Vec<Asset>,
        account_id: Option<&str>,
    ) -> Result<Vec<AssetExtended>>;
}

// Re-export commonly used types for convenience
pub use access_details::SubgraphClient;
pub use bookmarks::BookmarksFetcher;
