//! Error types for the inventory engine.
//!
//! This module provides the error hierarchy for every operation in the
//! crate: identifier and API version decoding, configuration loading,
//! and input document handling for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the inventory engine.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Resource identity errors (malformed persisted data).
    #[error("Object error: {0}")]
    Object(#[from] ObjectError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input document errors.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised while decoding resource identities and API versions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    /// A persisted identifier does not match the `namespace/name/group/kind` grammar.
    #[error("Invalid identifier '{id}': {reason}")]
    InvalidIdentifier {
        /// The offending identifier string.
        id: String,
        /// Why the identifier was rejected.
        reason: String,
    },

    /// An API version string could not be split into group and version.
    #[error("Invalid API version '{api_version}': {reason}")]
    InvalidApiVersion {
        /// The offending API version string.
        api_version: String,
        /// Why the API version was rejected.
        reason: String,
    },
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file was not found.
    #[error("Configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The configuration file could not be parsed.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// Validation failed.
    #[error("Configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation error.
        message: String,
        /// Field that failed validation.
        field: Option<String>,
    },

    /// The same kind is listed in more than one priority tier.
    #[error("Kind '{kind}' is listed in both tier '{first}' and tier '{second}'")]
    DuplicateKind {
        /// The duplicated kind.
        kind: String,
        /// Tier where the kind first appeared.
        first: String,
        /// Tier where the kind appeared again.
        second: String,
    },
}

/// Errors raised while reading input documents (inventories, change sets, references).
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document file does not exist.
    #[error("Document not found: {path}")]
    NotFound {
        /// Path to the missing document.
        path: PathBuf,
    },

    /// The document could not be deserialized.
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// Path to the document.
        path: PathBuf,
        /// Description of the parse error.
        message: String,
    },
}

/// Result type alias for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

impl InventoryError {
    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this error signals corrupt persisted or declared data.
    ///
    /// These errors need operator attention; retrying the same input
    /// will fail the same way.
    #[must_use]
    pub const fn is_corruption(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl ObjectError {
    /// Creates an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid API version error.
    #[must_use]
    pub fn invalid_api_version(api_version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidApiVersion {
            api_version: api_version.into(),
            reason: reason.into(),
        }
    }
}

impl ConfigError {
    /// Creates a validation error for a specific field.
    #[must_use]
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_errors_are_corruption() {
        let err: InventoryError = ObjectError::invalid_identifier("a/b", "wrong field count").into();
        assert!(err.is_corruption());

        let err: InventoryError = ObjectError::invalid_api_version("a/b/c", "too many '/'").into();
        assert!(err.is_corruption());

        assert!(!InventoryError::internal("boom").is_corruption());
    }

    #[test]
    fn test_error_messages() {
        let err = ObjectError::invalid_identifier("bad", "expected 4 fields, found 1");
        assert_eq!(
            err.to_string(),
            "Invalid identifier 'bad': expected 4 fields, found 1"
        );

        let err = ConfigError::DuplicateKind {
            kind: String::from("Namespace"),
            first: String::from("a"),
            second: String::from("b"),
        };
        assert!(err.to_string().contains("Namespace"));
    }
}
