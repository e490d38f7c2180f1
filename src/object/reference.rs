//! Resolution of loosely typed dependency references into identities.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ObjectError;

use super::group_version::GroupVersion;
use super::identity::ResourceIdentity;

/// API version assumed when a reference omits it.
///
/// Older declarations only referenced workloads and carried no
/// `apiVersion` field; those references always meant `apps/v1`.
pub const LEGACY_API_VERSION: &str = "apps/v1";

/// A dependency declaration pointing at a resource by kind and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalReference {
    /// API version of the referent (`group/version` or `version`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Kind of the referent.
    pub kind: String,
    /// Name of the referent.
    pub name: String,
    /// Namespace of the referent, if namespaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ExternalReference {
    /// Creates a reference without API version or namespace.
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api_version: None,
            kind: kind.into(),
            name: name.into(),
            namespace: None,
        }
    }

    /// Sets the API version.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Returns the effective group/version, applying the legacy default.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidApiVersion`] if the API version is malformed.
    pub fn group_version(&self) -> Result<GroupVersion, ObjectError> {
        let api_version = match self.api_version.as_deref() {
            None | Some("") => LEGACY_API_VERSION,
            Some(v) => v,
        };
        GroupVersion::parse(api_version)
    }

    /// Resolves the reference into a resource identity.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidApiVersion`] if the API version is malformed.
    pub fn to_identity(&self) -> Result<ResourceIdentity, ObjectError> {
        let gv = self.group_version()?;
        let namespace = self
            .namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .unwrap_or_default();

        Ok(ResourceIdentity::new(
            gv.group,
            self.kind.as_str(),
            namespace,
            self.name.as_str(),
        ))
    }
}

/// Resolves references into identities, preserving input order.
///
/// No de-duplication happens. The first malformed reference aborts the
/// whole resolution.
///
/// # Errors
///
/// Returns [`ObjectError::InvalidApiVersion`] on the first malformed API version.
pub fn resolve_references(
    references: &[ExternalReference],
) -> Result<Vec<ResourceIdentity>, ObjectError> {
    let identities = references
        .iter()
        .map(ExternalReference::to_identity)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Resolved {} references", identities.len());
    Ok(identities)
}
