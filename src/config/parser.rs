//! Configuration parser for loading configuration files.
//!
//! This module handles loading configuration from YAML files and environment
//! variables, with proper precedence and error handling.

use crate::error::{ConfigError, InventoryError, Result};
use crate::ordering::KindTier;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::spec::InventoryConfig;

/// Environment variable overriding the kind-priority tiers.
pub const TIERS_ENV_VAR: &str = "KINV_ORDERING_TIERS";

/// Default configuration file names to search for.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["kinv.yaml", "kinv.yml", ".kinv.yaml"];

/// Configuration parser for loading inventory configuration.
#[derive(Debug, Default)]
pub struct ConfigParser;

impl ConfigParser {
    /// Creates a new configuration parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<InventoryConfig> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());

        if !path.exists() {
            return Err(InventoryError::Config(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            InventoryError::Config(ConfigError::ParseError {
                message: format!("Failed to read file: {e}"),
                location: Some(path.display().to_string()),
            })
        })?;

        self.parse_yaml(&content, Some(path))
    }

    /// Parses configuration from a YAML string.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(&self, content: &str, source: Option<&Path>) -> Result<InventoryConfig> {
        debug!("Parsing YAML configuration");

        if content.trim().is_empty() {
            return Ok(InventoryConfig::default());
        }

        let config: InventoryConfig = serde_yaml::from_str(content).map_err(|e| {
            let location = source.map(|p| p.display().to_string());
            InventoryError::Config(ConfigError::ParseError {
                message: format!("YAML parse error: {e}"),
                location,
            })
        })?;

        debug!("Parsed {} ordering tiers", config.ordering.tiers.len());
        Ok(config)
    }

    /// Loads configuration with environment variable overrides.
    ///
    /// With no path, the current directory and its parents are searched; if
    /// nothing is found the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is found but cannot be read or parsed, or if
    /// the override variable is malformed.
    pub fn load_with_env(&self, path: Option<&Path>) -> Result<InventoryConfig> {
        let mut config = match path {
            Some(path) => self.load_file(path)?,
            None => match find_config_file(std::env::current_dir()?) {
                Ok(found) => self.load_file(found)?,
                Err(_) => {
                    debug!("No configuration file found, using defaults");
                    InventoryConfig::default()
                }
            },
        };

        Self::apply_env_overrides(&mut config)?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(config: &mut InventoryConfig) -> Result<()> {
        if let Ok(value) = std::env::var(TIERS_ENV_VAR) {
            debug!("Overriding ordering.tiers from environment");
            config.ordering.tiers = parse_tiers_override(&value)?;
        }
        Ok(())
    }
}

/// Parses a tier override of the form `name=KindA,KindB;name2=KindC`.
///
/// # Errors
///
/// Returns a parse error if a tier is missing its `=` separator.
pub fn parse_tiers_override(value: &str) -> Result<Vec<KindTier>> {
    value
        .split(';')
        .map(str::trim)
        .filter(|tier| !tier.is_empty())
        .map(|tier| -> Result<KindTier> {
            let (name, kinds) = tier.split_once('=').ok_or_else(|| {
                InventoryError::Config(ConfigError::ParseError {
                    message: format!("Tier '{tier}' must have the form name=Kind,Kind"),
                    location: Some(TIERS_ENV_VAR.to_string()),
                })
            })?;

            let kinds: Vec<&str> = kinds
                .split(',')
                .map(str::trim)
                .filter(|kind| !kind.is_empty())
                .collect();

            Ok(KindTier::new(name.trim(), kinds))
        })
        .collect()
}

/// Finds the configuration file in the given directory or its parents.
///
/// # Errors
///
/// Returns an error if no configuration file is found.
pub fn find_config_file(start_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let start = start_dir.as_ref();
    let mut current = start.to_path_buf();

    loop {
        for filename in DEFAULT_CONFIG_FILES {
            let config_path = current.join(filename);
            if config_path.exists() {
                info!("Found configuration file: {}", config_path.display());
                return Ok(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    Err(InventoryError::Config(ConfigError::FileNotFound {
        path: start.join(DEFAULT_CONFIG_FILES[0]),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = ConfigParser::new().parse_yaml("", None).unwrap();
        assert_eq!(config, InventoryConfig::default());
    }

    #[test]
    fn test_parse_custom_tiers() {
        let yaml = r"
ordering:
  tiers:
    - name: namespaces
      kinds: [Namespace]
    - name: definitions
      kinds: [CustomResourceDefinition]
    - name: rbac
      kinds: [ServiceAccount, ClusterRole, ClusterRoleBinding]
";
        let config = ConfigParser::new().parse_yaml(yaml, None).unwrap();
        assert_eq!(config.ordering.tiers.len(), 3);
        assert_eq!(config.ordering.tiers[2].kinds.len(), 3);

        let order = config.kind_order().unwrap();
        assert_eq!(order.rank_of("ClusterRole"), 2);
        assert_eq!(order.rank_of("Deployment"), 3);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = ConfigParser::new()
            .parse_yaml("ordering: [", Some(Path::new("kinv.yaml")))
            .unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Config(ConfigError::ParseError { location: Some(_), .. })
        ));
    }

    #[test]
    fn test_parse_tiers_override() {
        let tiers = parse_tiers_override("namespaces=Namespace; crds = CustomResourceDefinition, ").unwrap();
        assert_eq!(
            tiers,
            vec![
                KindTier::new("namespaces", ["Namespace"]),
                KindTier::new("crds", ["CustomResourceDefinition"]),
            ]
        );

        assert!(parse_tiers_override("namespaces").is_err());
    }

    #[test]
    fn test_load_file_and_discovery() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join("kinv.yaml"),
            "ordering:\n  tiers:\n    - name: first\n      kinds: [Secret]\n",
        )
        .unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join("kinv.yaml"));

        let config = ConfigParser::new().load_file(&found).unwrap();
        assert_eq!(config.ordering.tiers[0].kinds, vec!["Secret"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigParser::new().load_file("/definitely/not/here/kinv.yaml").unwrap_err();
        assert!(matches!(err, InventoryError::Config(ConfigError::FileNotFound { .. })));
    }
}
