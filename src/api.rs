use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::services::AssetResolver;

/// NFT states still visible on the market: active, ordering disabled, unlisted
const LISTED_NFT_STATES: [u8; 3] = [0, 4, 5];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub chain_id: u64,
    #[serde(default)]
    pub nft_address: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub services: Vec<Service>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub datatokens: Vec<Datatoken>,
    #[serde(default)]
    pub nft: Option<NftInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub asset_type: String, // "dataset", "algorithm"
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: String, // "access", "compute"
    #[serde(default)]
    pub datatoken_address: String,
    /// Seconds an order stays valid, 0 means forever
    #[serde(default)]
    pub timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Datatoken {
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub service_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NftInfo {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub state: u8,
}

impl Asset {
    /// Dataset name, falling back to the DID for unnamed assets
    pub fn title(&self) -> &str {
        if self.metadata.name.trim().is_empty() {
            &self.id
        } else {
            &self.metadata.name
        }
    }

    pub fn first_datatoken(&self) -> Option<&Datatoken> {
        self.datatokens.first()
    }

    /// Order timeout of the service the first datatoken is attached to
    pub fn access_timeout(&self) -> u64 {
        let Some(datatoken) = self.first_datatoken() else {
            return 0;
        };

        self.services
            .iter()
            .find(|s| {
                s.id == datatoken.service_id
                    || s.datatoken_address.eq_ignore_ascii_case(&datatoken.address)
            })
            .map(|s| s.timeout)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum AccessType {
    #[serde(rename = "fixed")]
    Fixed,
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "NOT_SUPPORTED")]
    NotSupported,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TokenInfo {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Pricing and entitlement for one asset, relative to the connected account
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AccessDetails {
    pub access_type: AccessType,
    pub price: String,
    pub base_token: Option<TokenInfo>,
    pub datatoken: Option<TokenInfo>,
    pub is_purchasable: bool,
    pub is_owned: bool,
    pub valid_order_tx: Option<String>,
}

/// Resolved asset plus its computed access details
#[derive(Debug, Clone, PartialEq)]
pub struct AssetExtended {
    pub asset: Asset,
    pub access_details: Option<AccessDetails>,
}

impl AssetExtended {
    pub fn did(&self) -> &str {
        &self.asset.id
    }

    pub fn title(&self) -> &str {
        self.asset.title()
    }

    pub fn symbol(&self) -> &str {
        self.asset
            .first_datatoken()
            .map(|dt| dt.symbol.as_str())
            .unwrap_or("")
    }

    /// Full datatoken name, shown as the symbol's detail
    pub fn token_name(&self) -> &str {
        self.asset
            .first_datatoken()
            .map(|dt| dt.name.as_str())
            .unwrap_or("")
    }
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    hits: Hits,
}

#[derive(Debug, Deserialize)]
struct Hits {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: Asset,
}

/// Build the metadata cache query selecting `dids` on the given chains
pub fn build_dids_query(dids: &[String], chain_ids: &[u64]) -> Value {
    json!({
        "from": 0,
        "size": dids.len().max(1),
        "query": {
            "bool": {
                "filter": [
                    { "terms": { "chainId": chain_ids } },
                    { "terms": { "_id": dids } },
                    { "terms": { "nft.state": LISTED_NFT_STATES } }
                ]
            }
        }
    })
}

/// Return assets in the order of `dids`, skipping DIDs with no match and repeats
pub fn order_by_dids(dids: &[String], mut assets: Vec<Asset>) -> Vec<Asset> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::with_capacity(assets.len());

    for did in dids {
        if !seen.insert(did.as_str()) {
            continue;
        }
        if let Some(pos) = assets.iter().position(|a| &a.id == did) {
            ordered.push(assets.swap_remove(pos));
        }
    }

    ordered
}

/// Client for the Aquarius metadata cache
#[derive(Clone)]
pub struct AquariusClient {
    base_url: String,
    client: Client,
}

impl AquariusClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a raw Elasticsearch query against the asset index
    pub async fn query_assets(&self, query: &Value) -> Result<Vec<Asset>> {
        let url = format!("{}/api/aquarius/assets/query", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(query)
            .send()
            .await
            .context("Failed to query metadata cache")?
            .error_for_status()?;

        let body: QueryResponse = response
            .json()
            .await
            .context("Failed to parse metadata cache response")?;

        Ok(body.hits.hits.into_iter().map(|hit| hit.source).collect())
    }

    /// Resolve bookmarked DIDs to assets on the selected chains
    pub async fn retrieve_assets_by_dids(
        &self,
        dids: &[String],
        chain_ids: &[u64],
        cancel: CancellationToken,
    ) -> Result<Vec<Asset>> {
        if dids.is_empty() || chain_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = build_dids_query(dids, chain_ids);
        let assets = tokio::select! {
            _ = cancel.cancelled() => anyhow::bail!("metadata cache request cancelled"),
            result = self.query_assets(&query) => result?,
        };

        debug!(
            requested = dids.len(),
            found = assets.len(),
            "resolved bookmarked DIDs"
        );

        Ok(order_by_dids(dids, assets))
    }
}

#[async_trait]
impl AssetResolver for AquariusClient {
    async fn resolve(
        &self,
        dids: &[String],
        chain_ids: &[u64],
        cancel: CancellationToken,
    ) -> Result<Vec<Asset>> {
        self.retrieve_assets_by_dids(dids, chain_ids, cancel).await
    }
}
