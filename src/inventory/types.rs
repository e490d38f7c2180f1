//! Inventory record types.
//!
//! These types are the persisted record of what a reconciliation cycle
//! applied, plus the apply-result batch that feeds it.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::object::ResourceIdentity;

/// A persisted reference to one applied resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Encoded resource identity.
    pub id: String,
    /// API version active when the resource was last applied.
    #[serde(alias = "v")]
    pub version: String,
}

/// The record of resources materialized by a reconciliation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Entries in ingestion order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<ResourceRef>,
}

/// A decoded inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedResourceRef {
    /// Resource identity.
    pub identity: ResourceIdentity,
    /// API version recorded for the resource.
    pub version: String,
}

/// What the apply executor did with a resource.
///
/// Carried through ingestion for logging only; the inventory records every
/// applied resource regardless of the action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    /// The resource was created.
    Created,
    /// The resource was updated.
    Configured,
    /// The resource was already up to date.
    #[default]
    Unchanged,
    /// The resource was deleted.
    Deleted,
    /// The resource was skipped.
    Skipped,
}

/// One applied resource reported by the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSetEntry {
    /// Identity of the applied resource.
    pub identity: ResourceIdentity,
    /// API version the resource was applied with.
    pub version: String,
    /// Action taken by the executor.
    #[serde(default)]
    pub action: ChangeAction,
}

/// The batch of apply results from one reconciliation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Applied resources in apply order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<ChangeSetEntry>,
}

/// Reads a missing or `null` list as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ResourceRef {
    /// Creates a reference for an identity.
    #[must_use]
    pub fn new(identity: &ResourceIdentity, version: impl Into<String>) -> Self {
        Self {
            id: identity.encode(),
            version: version.into(),
        }
    }
}

impl Inventory {
    /// Returns the number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the inventory has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in ingestion order.
    #[must_use]
    pub fn entries(&self) -> &[ResourceRef] {
        &self.entries
    }

    /// Returns the version recorded for an identity.
    ///
    /// When the identity was recorded more than once, the first entry wins.
    #[must_use]
    pub fn version_of(&self, identity: &ResourceIdentity) -> Option<&str> {
        let id = identity.encode();
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.version.as_str())
    }
}

impl ResolvedResourceRef {
    /// Creates a resolved reference.
    #[must_use]
    pub fn new(identity: ResourceIdentity, version: impl Into<String>) -> Self {
        Self {
            identity,
            version: version.into(),
        }
    }

    /// Returns the full API version, `group/version` or `version` for the core group.
    #[must_use]
    pub fn api_version(&self) -> String {
        if self.identity.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.identity.group, self.version)
        }
    }
}

impl ChangeSetEntry {
    /// Creates an entry for an unchanged resource.
    #[must_use]
    pub fn new(identity: ResourceIdentity, version: impl Into<String>) -> Self {
        Self {
            identity,
            version: version.into(),
            action: ChangeAction::Unchanged,
        }
    }

    /// Sets the executor action.
    #[must_use]
    pub const fn with_action(mut self, action: ChangeAction) -> Self {
        self.action = action;
        self
    }
}

impl ChangeSet {
    /// Creates an empty change set.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends an entry.
    pub fn add(&mut self, entry: ChangeSetEntry) {
        self.entries.push(entry);
    }
}

impl FromIterator<ChangeSetEntry> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = ChangeSetEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ResolvedResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identity, self.api_version())
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Self::Created => "created",
            Self::Configured => "configured",
            Self::Unchanged => "unchanged",
            Self::Deleted => "deleted",
            Self::Skipped => "skipped",
        };
        write!(f, "{action}")
    }
}
