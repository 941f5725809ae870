use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Aquarius metadata cache endpoint. Bookmarks stay empty until this is set.
    #[serde(default)]
    pub metadata_cache_uri: Option<String>,
    #[serde(default = "default_market_uri")]
    pub market_uri: String,
    /// Subgraph endpoint per chain id, used for pricing
    #[serde(default)]
    pub subgraph_uris: HashMap<u64, String>,
    /// Networks offered for selection (keys 1-9 toggle them in order)
    #[serde(default = "default_networks")]
    pub networks: Vec<NetworkConfig>,
    /// Network scope used on first run, before any selection is stored
    #[serde(default = "default_chain_ids")]
    pub default_chain_ids: Vec<u64>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default)]
    pub open_command: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
}

impl Config {
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents).context("Failed to parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Endpoint with surrounding whitespace removed, `None` when blank
    pub fn metadata_cache_uri(&self) -> Option<String> {
        self.metadata_cache_uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
            .map(|uri| uri.trim_end_matches('/').to_string())
    }

    /// Account list with the configured default account first
    pub fn known_accounts(&self) -> Vec<String> {
        let mut accounts = Vec::new();
        if let Some(ref account) = self.account_id {
            accounts.push(account.clone());
        }
        for account in &self.accounts {
            if !accounts.iter().any(|a| a.eq_ignore_ascii_case(account)) {
                accounts.push(account.clone());
            }
        }
        accounts
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata_cache_uri: None,
            market_uri: default_market_uri(),
            subgraph_uris: HashMap::new(),
            networks: default_networks(),
            default_chain_ids: default_chain_ids(),
            account_id: None,
            accounts: Vec::new(),
            open_command: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_market_uri() -> String {
    "https://market.oceanprotocol.com".to_string()
}

fn default_networks() -> Vec<NetworkConfig> {
    vec![
        NetworkConfig {
            chain_id: 1,
            name: "ETH".to_string(),
        },
        NetworkConfig {
            chain_id: 137,
            name: "Polygon".to_string(),
        },
    ]
}

fn default_chain_ids() -> Vec<u64> {
    vec![1, 137]
}

fn default_request_timeout_secs() -> u64 {
    20
}
