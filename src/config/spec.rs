//! Configuration specification types.
//!
//! These structs map to the `kinv.yaml` file. Every section is optional;
//! an absent file behaves like an empty one.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ordering::{KindOrder, KindTier, default_tiers};

/// The root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Resource ordering configuration.
    #[serde(default)]
    pub ordering: OrderingConfig,
}

/// Kind-priority table used by listing and diffing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderingConfig {
    /// Priority tiers, highest priority first.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<KindTier>,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

impl InventoryConfig {
    /// Builds the kind order described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateKind`] if a kind is listed in two tiers.
    pub fn kind_order(&self) -> Result<KindOrder, ConfigError> {
        KindOrder::new(self.ordering.tiers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_default_order() {
        let order = InventoryConfig::default().kind_order().unwrap();
        assert_eq!(order.tiers(), KindOrder::default().tiers());
    }

    #[test]
    fn test_missing_ordering_section_uses_defaults() {
        let config: InventoryConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.ordering.tiers, default_tiers());
    }
}
