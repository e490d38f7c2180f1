//! Diff engine for computing prune sets between inventories.
//!
//! The diff answers "which resources did the previous cycle record that the
//! current cycle no longer does", which is exactly the set a caller prunes.

use std::collections::HashSet;
use tracing::debug;

use crate::error::Result;
use crate::object::ResourceIdentity;
use crate::ordering::KindOrder;

use super::lister::list_identities;
use super::types::{Inventory, ResolvedResourceRef};

/// Identities ignored on the source side of a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    /// Excluded identities.
    identities: HashSet<ResourceIdentity>,
}

/// Engine for computing inventory differences.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    /// Sort order applied to results.
    order: KindOrder,
}

impl ExclusionSet {
    /// Creates an empty exclusion set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an exclusion set from encoded identifiers.
    ///
    /// # Errors
    ///
    /// Returns an invalid identifier error on the first malformed id.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self> {
        let identities = ids
            .iter()
            .map(|id| ResourceIdentity::decode(id.as_ref()))
            .collect::<std::result::Result<HashSet<_>, _>>()?;
        Ok(Self { identities })
    }

    /// Adds an identity. Returns false if it was already present.
    pub fn insert(&mut self, identity: ResourceIdentity) -> bool {
        self.identities.insert(identity)
    }

    /// Returns true if the identity is excluded.
    #[must_use]
    pub fn contains(&self, identity: &ResourceIdentity) -> bool {
        self.identities.contains(identity)
    }

    /// Returns the number of excluded identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Returns true if nothing is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

impl FromIterator<ResourceIdentity> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = ResourceIdentity>>(iter: I) -> Self {
        Self {
            identities: iter.into_iter().collect(),
        }
    }
}

impl DiffEngine {
    /// Creates a diff engine with the given order.
    #[must_use]
    pub const fn new(order: KindOrder) -> Self {
        Self { order }
    }

    /// Returns resources recorded in `source` but absent from `target`.
    ///
    /// Identities in `exclusions` are dropped from `source` first; they never
    /// affect `target`. Membership compares identities only, so a version
    /// change alone does not make a resource a prune candidate. Each result
    /// carries the version recorded in `source` (first entry on duplicates)
    /// and results are sorted like a listing.
    ///
    /// An empty vector means nothing to prune.
    ///
    /// # Errors
    ///
    /// Returns an invalid identifier error if either inventory holds a
    /// malformed entry.
    pub fn diff(
        &self,
        source: &Inventory,
        target: &Inventory,
        exclusions: &ExclusionSet,
    ) -> Result<Vec<ResolvedResourceRef>> {
        let source_ids = list_identities(source)?;
        let target_ids: HashSet<ResourceIdentity> = list_identities(target)?.into_iter().collect();

        let mut emitted: HashSet<&ResourceIdentity> = HashSet::new();
        let mut refs = Vec::new();

        for (identity, entry) in source_ids.iter().zip(source.entries()) {
            if exclusions.contains(identity) || target_ids.contains(identity) {
                continue;
            }
            // First entry for an identity supplies the version.
            if emitted.insert(identity) {
                refs.push(ResolvedResourceRef::new(identity.clone(), entry.version.as_str()));
            }
        }

        self.order.sort(&mut refs);

        debug!(
            "Diff: {} source, {} target, {} excluded, {} to prune",
            source.len(),
            target.len(),
            exclusions.len(),
            refs.len()
        );

        Ok(refs)
    }
}
