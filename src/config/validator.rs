//! Configuration validation.
//!
//! Checks the kind-priority table before it is turned into a
//! [`KindOrder`](crate::ordering::KindOrder).

use crate::error::{ConfigError, InventoryError, Result};
use std::collections::HashSet;
use tracing::debug;

use super::spec::{InventoryConfig, OrderingConfig};

/// Validator for inventory configurations.
#[derive(Debug, Default)]
pub struct ConfigValidator;

/// Validation result containing all errors found.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of warnings (non-fatal issues).
    pub warnings: Vec<String>,
}

/// A single validation error.
#[derive(Debug)]
pub struct ValidationError {
    /// The field path that failed validation.
    pub field: String,
    /// The error message.
    pub message: String,
}

impl ConfigValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found, if any.
    pub fn validate(&self, config: &InventoryConfig) -> Result<ValidationResult> {
        let mut result = ValidationResult::default();

        Self::validate_ordering(&config.ordering, &mut result);

        match result.errors.first() {
            None => {
                debug!("Configuration validation passed");
                Ok(result)
            }
            Some(first) => Err(InventoryError::Config(ConfigError::validation(
                first.message.clone(),
                first.field.clone(),
            ))),
        }
    }

    /// Validates the ordering tiers.
    fn validate_ordering(ordering: &OrderingConfig, result: &mut ValidationResult) {
        let mut tier_names = HashSet::new();

        for (i, tier) in ordering.tiers.iter().enumerate() {
            let prefix = format!("ordering.tiers[{i}]");

            if tier.name.trim().is_empty() {
                result.errors.push(ValidationError {
                    field: format!("{prefix}.name"),
                    message: String::from("Tier name cannot be empty"),
                });
            } else if !tier_names.insert(tier.name.as_str()) {
                result
                    .warnings
                    .push(format!("Tier name '{}' is used more than once", tier.name));
            }

            if tier.kinds.is_empty() {
                result
                    .warnings
                    .push(format!("Tier '{}' lists no kinds", tier.name));
            }

            for (j, kind) in tier.kinds.iter().enumerate() {
                if kind.is_empty() {
                    result.errors.push(ValidationError {
                        field: format!("{prefix}.kinds[{j}]"),
                        message: String::from("Kind cannot be empty"),
                    });
                } else if kind.trim() != kind || kind.contains('/') {
                    result.errors.push(ValidationError {
                        field: format!("{prefix}.kinds[{j}]"),
                        message: format!("Kind '{kind}' is not a valid kind name"),
                    });
                }
            }
        }
    }
}

impl ValidationResult {
    /// Returns true if no errors were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::KindTier;

    fn config(tiers: Vec<KindTier>) -> InventoryConfig {
        InventoryConfig {
            ordering: OrderingConfig { tiers },
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let result = ConfigValidator::new()
            .validate(&InventoryConfig::default())
            .unwrap();
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_tier_name_rejected() {
        let err = ConfigValidator::new()
            .validate(&config(vec![KindTier::new(" ", ["Namespace"])]))
            .unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Config(ConfigError::ValidationError { field: Some(ref f), .. })
                if f == "ordering.tiers[0].name"
        ));
    }

    #[test]
    fn test_bad_kind_rejected() {
        let err = ConfigValidator::new()
            .validate(&config(vec![KindTier::new("x", ["Namespace", " Role"])]))
            .unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Config(ConfigError::ValidationError { field: Some(ref f), .. })
                if f == "ordering.tiers[0].kinds[1]"
        ));
    }

    #[test]
    fn test_empty_tier_warns() {
        let result = ConfigValidator::new()
            .validate(&config(vec![KindTier::new("later", Vec::<String>::new())]))
            .unwrap();
        assert_eq!(result.warnings.len(), 1);
    }
}
