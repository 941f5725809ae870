//! Access details from the Ocean subgraph
//!
//! One GraphQL query per chain fetches price sources (dispensers, fixed-rate
//! exchanges) and the account's orders for every datatoken, then each asset
//! gets an `AccessDetails` derived from its first datatoken.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::{debug, warn};

use super::AccessDetailsProvider;
use crate::api::{AccessDetails, AccessType, Asset, AssetExtended, TokenInfo};

const TOKENS_PRICE_QUERY: &str = r#"query TokensPriceQuery($datatokenIds: [ID!], $account: String) {
  tokens(where: { id_in: $datatokenIds }) {
    id
    symbol
    name
    orders(where: { payer: $account }, orderBy: createdTimestamp, orderDirection: desc) {
      tx
      createdTimestamp
    }
    dispensers {
      id
      active
    }
    fixedRateExchanges {
      id
      exchangeId
      price
      active
      baseToken {
        address
        symbol
        name
        decimals
      }
    }
  }
}"#;

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct TokensData {
    #[serde(default)]
    tokens: Vec<TokenPrice>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPrice {
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub orders: Vec<OrderInfo>,
    #[serde(default)]
    pub dispensers: Vec<DispenserInfo>,
    #[serde(default)]
    pub fixed_rate_exchanges: Vec<FixedRateInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    pub tx: String,
    pub created_timestamp: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DispenserInfo {
    pub id: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedRateInfo {
    pub id: String,
    #[serde(default)]
    pub exchange_id: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub active: bool,
    pub base_token: Option<BaseToken>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseToken {
    pub address: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

fn default_decimals() -> u8 {
    18
}

/// Derive access details for one datatoken
///
/// `timeout` is the service's order validity in seconds (0 = never expires),
/// `now` the current unix time.
pub fn access_details_from_token(token: &TokenPrice, timeout: u64, now: i64) -> AccessDetails {
    let valid_order = token.orders.first().filter(|order| {
        timeout == 0 || (order.created_timestamp.saturating_add(timeout) as i64) > now
    });

    let mut details = AccessDetails {
        access_type: AccessType::NotSupported,
        price: "0".to_string(),
        base_token: None,
        datatoken: Some(TokenInfo {
            address: token.id.clone(),
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            decimals: 18,
        }),
        is_purchasable: false,
        is_owned: valid_order.is_some(),
        valid_order_tx: valid_order.map(|order| order.tx.clone()),
    };

    if let Some(dispenser) = token.dispensers.first() {
        details.access_type = AccessType::Free;
        details.is_purchasable = dispenser.active;
    } else if let Some(fixed) = token.fixed_rate_exchanges.first() {
        details.access_type = AccessType::Fixed;
        details.price = fixed.price.clone();
        details.is_purchasable = fixed.active;
        details.base_token = fixed.base_token.as_ref().map(|base| TokenInfo {
            address: base.address.clone(),
            name: base.name.clone(),
            symbol: base.symbol.clone(),
            decimals: base.decimals,
        });
    }

    details
}

/// Client for the per-chain Ocean subgraphs
#[derive(Clone)]
pub struct SubgraphClient {
    uris: HashMap<u64, String>,
    client: Client,
}

impl SubgraphClient {
    pub fn new(uris: HashMap<u64, String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { uris, client })
    }

    async fn fetch_token_prices(
        &self,
        uri: &str,
        datatoken_ids: &[String],
        account_id: Option<&str>,
    ) -> Result<Vec<TokenPrice>> {
        let body = json!({
            "query": TOKENS_PRICE_QUERY,
            "variables": {
                "datatokenIds": datatoken_ids,
                "account": account_id.map(str::to_lowercase).unwrap_or_default(),
            }
        });

        let response = self
            .client
            .post(uri)
            .json(&body)
            .send()
            .await
            .context("Failed to query subgraph")?
            .error_for_status()?;

        let parsed: GraphQlResponse<TokensData> = response
            .json()
            .await
            .context("Failed to parse subgraph response")?;

        if !parsed.errors.is_empty() {
            let messages: Vec<&str> = parsed.errors.iter().map(|e| e.message.as_str()).collect();
            anyhow::bail!("subgraph returned errors: {}", messages.join("; "));
        }

        Ok(parsed.data.map(|d| d.tokens).unwrap_or_default())
    }
}

#[async_trait]
impl AccessDetailsProvider for SubgraphClient {
    async fn compute(
        &self,
        assets: Vec<Asset>,
        account_id: Option<&str>,
    ) -> Result<Vec<AssetExtended>> {
        // Datatoken ids grouped by chain
        let mut by_chain: BTreeMap<u64, Vec<String>> = BTreeMap::new();
        for asset in &assets {
            if let Some(datatoken) = asset.first_datatoken() {
                by_chain
                    .entry(asset.chain_id)
                    .or_default()
                    .push(datatoken.address.to_lowercase());
            }
        }

        let mut prices: HashMap<String, TokenPrice> = HashMap::new();
        for (chain_id, datatoken_ids) in &by_chain {
            let Some(uri) = self.uris.get(chain_id) else {
                warn!(chain_id, "no subgraph configured, assets on this chain have no price");
                continue;
            };

            let tokens = self
                .fetch_token_prices(uri, datatoken_ids, account_id)
                .await
                .with_context(|| format!("Failed to fetch token prices for chain {}", chain_id))?;

            debug!(chain_id, tokens = tokens.len(), "fetched token prices");
            for token in tokens {
                prices.insert(token.id.to_lowercase(), token);
            }
        }

        let now = chrono::Utc::now().timestamp();
        Ok(extend_assets(assets, &prices, now))
    }
}

/// Attach access details to assets; assets without a datatoken are dropped
pub fn extend_assets(
    assets: Vec<Asset>,
    prices: &HashMap<String, TokenPrice>,
    now: i64,
) -> Vec<AssetExtended> {
    assets
        .into_iter()
        .filter_map(|asset| {
            let access_details = {
                let datatoken = asset.first_datatoken()?;
                prices
                    .get(&datatoken.address.to_lowercase())
                    .map(|token| access_details_from_token(token, asset.access_timeout(), now))
            };
            Some(AssetExtended {
                asset,
                access_details,
            })
        })
        .collect()
}
