//! Configuration file structure

use serde::{Deserialize, Serialize};

fn default_max_retries() -> u32 {
    2
}

fn default_api_key() -> String {
    "supersecretkey".to_string()
}

/// Configuration merged from files, environment, and defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Corrective retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Shared secret presented to the dispatch gate
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            api_key: default_api_key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.api_key, "supersecretkey");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RelayConfig = toml::from_str("max_retries = 5").unwrap();
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.api_key, "supersecretkey");
    }
}
