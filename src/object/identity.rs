//! Resource identity and its persisted string encoding.
//!
//! An identity is the `(group, kind, namespace, name)` tuple that decides
//! whether two records describe the same resource. The API version is
//! deliberately not part of it.
//!
//! The encoded form is `<namespace>/<name>/<group>/<kind>`. It is stored in
//! persisted inventories, so the grammar must not change without bumping
//! [`ID_FORMAT_VERSION`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ObjectError;

/// Version of the identifier encoding written by [`ResourceIdentity::encode`].
pub const ID_FORMAT_VERSION: u32 = 1;

/// Separator between identifier fields.
const SEPARATOR: char = '/';

/// Number of fields in an encoded identifier.
const FIELD_COUNT: usize = 4;

/// Canonical identity of a resource in the target system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentity {
    /// API group (empty for the core group).
    #[serde(default)]
    pub group: String,
    /// Resource kind.
    pub kind: String,
    /// Namespace (empty for cluster-scoped or unset).
    #[serde(default)]
    pub namespace: String,
    /// Resource name.
    pub name: String,
}

impl ResourceIdentity {
    /// Creates a new identity.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            kind: kind.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Returns true if the identity carries a namespace.
    #[must_use]
    pub fn is_namespaced(&self) -> bool {
        !self.namespace.is_empty()
    }

    /// Encodes the identity into its persisted string form.
    ///
    /// The result decodes back to an equal identity whenever
    /// [`validate`](Self::validate) succeeds.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{ns}{SEPARATOR}{name}{SEPARATOR}{group}{SEPARATOR}{kind}",
            ns = self.namespace,
            name = self.name,
            group = self.group,
            kind = self.kind,
        )
    }

    /// Decodes an identity from its persisted string form.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidIdentifier`] if the string is empty,
    /// does not have exactly four fields, or has an empty name or kind.
    pub fn decode(id: &str) -> Result<Self, ObjectError> {
        if id.is_empty() {
            return Err(ObjectError::invalid_identifier(id, "identifier is empty"));
        }

        let fields: Vec<&str> = id.split(SEPARATOR).collect();
        let &[namespace, name, group, kind] = fields.as_slice() else {
            return Err(ObjectError::invalid_identifier(
                id,
                format!(
                    "expected {FIELD_COUNT} '{SEPARATOR}'-separated fields, found {}",
                    fields.len()
                ),
            ));
        };

        for (label, value, required) in [
            ("namespace", namespace, false),
            ("name", name, true),
            ("group", group, false),
            ("kind", kind, true),
        ] {
            check_field(label, value, required)
                .map_err(|reason| ObjectError::invalid_identifier(id, reason))?;
        }

        Ok(Self::new(group, kind, namespace, name))
    }

    /// Checks that the identity can be encoded and decoded without loss.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidIdentifier`] if a field contains the
    /// separator or surrounding whitespace, or if name or kind is empty.
    pub fn validate(&self) -> Result<(), ObjectError> {
        for (label, value, required) in [
            ("namespace", self.namespace.as_str(), false),
            ("name", self.name.as_str(), true),
            ("group", self.group.as_str(), false),
            ("kind", self.kind.as_str(), true),
        ] {
            if value.contains(SEPARATOR) {
                return Err(ObjectError::invalid_identifier(
                    self.encode(),
                    format!("{label} must not contain '{SEPARATOR}'"),
                ));
            }
            check_field(label, value, required)
                .map_err(|reason| ObjectError::invalid_identifier(self.encode(), reason))?;
        }
        Ok(())
    }
}

/// Checks a single identifier field.
fn check_field(label: &str, value: &str, required: bool) -> Result<(), String> {
    if required && value.is_empty() {
        return Err(format!("{label} must not be empty"));
    }
    if value.trim() != value {
        return Err(format!("{label} has surrounding whitespace"));
    }
    Ok(())
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for ResourceIdentity {
    type Err = ObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_namespaced() {
        let id = ResourceIdentity::new("apps", "Deployment", "ns", "foo");
        assert_eq!(id.encode(), "ns/foo/apps/Deployment");
        assert_eq!(id.to_string(), "ns/foo/apps/Deployment");
    }

    #[test]
    fn test_encode_cluster_scoped_core_group() {
        let id = ResourceIdentity::new("", "Namespace", "", "team-a");
        assert_eq!(id.encode(), "/team-a//Namespace");
        assert!(!id.is_namespaced());
    }

    #[test]
    fn test_round_trip() {
        let ids = [
            ResourceIdentity::new("apps", "Deployment", "ns", "foo"),
            ResourceIdentity::new("", "Namespace", "", "team-a"),
            ResourceIdentity::new("", "ConfigMap", "default", "settings"),
            ResourceIdentity::new(
                "apiextensions.k8s.io",
                "CustomResourceDefinition",
                "",
                "widgets.example.com",
            ),
            ResourceIdentity::new("rbac.authorization.k8s.io", "ClusterRole", "", "system:viewer"),
        ];

        for id in ids {
            assert!(id.validate().is_ok());
            let decoded = ResourceIdentity::decode(&id.encode()).unwrap();
            assert_eq!(decoded, id);
        }
    }

    #[test]
    fn test_decode_fields() {
        let id: ResourceIdentity = "ns/bar/apps/Deployment".parse().unwrap();
        assert_eq!(id.namespace, "ns");
        assert_eq!(id.name, "bar");
        assert_eq!(id.group, "apps");
        assert_eq!(id.kind, "Deployment");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        for bad in [
            "",
            "foo",
            "ns/foo/apps",
            "ns/foo/apps/Deployment/extra",
            "ns//apps/Deployment",
            "ns/foo/apps/",
            "ns/ foo/apps/Deployment",
            "ns_foo_apps_Deployment",
        ] {
            let err = ResourceIdentity::decode(bad).unwrap_err();
            assert!(
                matches!(err, ObjectError::InvalidIdentifier { .. }),
                "expected InvalidIdentifier for {bad:?}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_separator_in_field() {
        let id = ResourceIdentity::new("apps", "Deployment", "ns", "a/b");
        assert!(id.validate().is_err());

        let id = ResourceIdentity::new("apps", "", "ns", "a");
        assert!(id.validate().is_err());
    }
}
