//! Fakes shared by the integration tests
#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

use marktui::api::{
    order_by_dids, AccessDetails, AccessType, Asset, AssetExtended, Datatoken, Metadata, TokenInfo,
};
use marktui::config::Config;
use marktui::prefs::PreferencesDb;
use marktui::services::{AccessDetailsProvider, AssetResolver};
use marktui::App;

/// Metadata cache stand-in serving a fixed catalogue
#[derive(Default)]
pub struct FakeResolver {
    pub catalogue: Mutex<Vec<Asset>>,
    pub fail: AtomicBool,
    pub calls: AtomicUsize,
}

impl FakeResolver {
    pub fn with_assets(assets: Vec<Asset>) -> Arc<Self> {
        Arc::new(Self {
            catalogue: Mutex::new(assets),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_catalogue(&self, assets: Vec<Asset>) {
        *self.catalogue.lock().unwrap() = assets;
    }
}

#[async_trait]
impl AssetResolver for FakeResolver {
    async fn resolve(
        &self,
        dids: &[String],
        chain_ids: &[u64],
        _cancel: CancellationToken,
    ) -> Result<Vec<Asset>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("connection refused");
        }

        let matching = self
            .catalogue
            .lock()
            .unwrap()
            .iter()
            .filter(|a| dids.contains(&a.id) && chain_ids.contains(&a.chain_id))
            .cloned()
            .collect();
        Ok(order_by_dids(dids, matching))
    }
}

/// Prices every asset at `<n> OCEAN`, where n comes from the asset description
///
/// The connected account owns everything.
pub struct FakePricing;

#[async_trait]
impl AccessDetailsProvider for FakePricing {
    async fn compute(
        &self,
        assets: Vec<Asset>,
        account_id: Option<&str>,
    ) -> Result<Vec<AssetExtended>> {
        Ok(assets
            .into_iter()
            .map(|asset| {
                let price = if asset.metadata.description.is_empty() {
                    "10.0".to_string()
                } else {
                    asset.metadata.description.clone()
                };
                AssetExtended {
                    access_details: Some(AccessDetails {
                        access_type: AccessType::Fixed,
                        price,
                        base_token: Some(TokenInfo {
                            address: "0xocean".to_string(),
                            name: "Ocean Token".to_string(),
                            symbol: "OCEAN".to_string(),
                            decimals: 18,
                        }),
                        datatoken: None,
                        is_purchasable: true,
                        is_owned: account_id.is_some(),
                        valid_order_tx: None,
                    }),
                    asset,
                }
            })
            .collect())
    }
}

pub fn asset(did: &str, chain_id: u64, name: &str, symbol: &str) -> Asset {
    Asset {
        id: did.to_string(),
        chain_id,
        nft_address: format!("0xnft{}", symbol.to_lowercase()),
        metadata: Metadata {
            name: name.to_string(),
            asset_type: "dataset".to_string(),
            created: "2022-06-01T10:00:00Z".to_string(),
            ..Default::default()
        },
        services: vec![],
        datatokens: vec![Datatoken {
            address: format!("0xdt{}", symbol.to_lowercase()),
            name: format!("{} Token", name),
            symbol: symbol.to_string(),
            service_id: "svc".to_string(),
        }],
        nft: None,
    }
}

/// Same as `asset`, priced at `price` by `FakePricing`
pub fn priced_asset(did: &str, name: &str, symbol: &str, price: &str) -> Asset {
    let mut asset = asset(did, 1, name, symbol);
    asset.metadata.description = price.to_string();
    asset
}

pub fn config() -> Config {
    Config {
        metadata_cache_uri: Some("https://aquarius.test".to_string()),
        accounts: vec!["0x1234567890abcdef1234567890abcdef12345678".to_string()],
        ..Config::default()
    }
}

pub fn prefs_with(bookmarks: &[&str]) -> PreferencesDb {
    let prefs = PreferencesDb::new_in_memory().unwrap();
    for did in bookmarks {
        prefs.add_bookmark(did).unwrap();
    }
    prefs
}

pub fn app(config: Config, prefs: PreferencesDb, resolver: &Arc<FakeResolver>) -> App {
    App::new(config, prefs, resolver.clone(), Arc::new(FakePricing), None).unwrap()
}

/// Apply outcomes until the current fetch has landed
pub async fn settle(app: &mut App) {
    while app.model.bookmarks.is_loading {
        assert!(app.wait_for_fetch().await, "fetch worker went away");
    }
}
