// tezos-indexer/src/config.rs

use serde::{Deserialize, Serialize};

/// Connection settings for an indexing service, consumed by the host's
/// gateway implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexerConfig {
    pub base_url: String,
    pub api_key: String,
    pub platform: Platform,
    pub network: Network,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

/// The platform segment of indexer query paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tezos,
}

/// The network segment of indexer query paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Ghostnet,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://conseil.example.com".into(),
            api_key: String::new(),
            platform: Platform::Tezos,
            network: Network::Mainnet,
            timeout_ms: 30_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndexerConfig::default();
        assert_eq!(config.platform, Platform::Tezos);
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_network_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Network::Mainnet).unwrap(), "\"mainnet\"");
        assert_eq!(serde_json::to_string(&Platform::Tezos).unwrap(), "\"tezos\"");
    }
}
