//! Configuration module for the inventory engine.
//!
//! This module handles all configuration-related functionality:
//! - Parsing and deserializing `kinv.yaml`
//! - Environment variable overrides
//! - Validation of the kind-priority table

mod parser;
mod spec;
mod validator;

pub use parser::{
    ConfigParser, DEFAULT_CONFIG_FILES, TIERS_ENV_VAR, find_config_file, parse_tiers_override,
};
pub use spec::{InventoryConfig, OrderingConfig};
pub use validator::{ConfigValidator, ValidationError, ValidationResult};
