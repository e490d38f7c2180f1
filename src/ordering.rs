//! Kind-priority ordering of resources.
//!
//! Executors apply and delete resources in the order the engine returns
//! them, so the order must put resources that others depend on (namespaces,
//! custom resource definitions) ahead of their dependents. The priority
//! table is data: callers can replace it from configuration.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::ConfigError;
use crate::inventory::ResolvedResourceRef;
use crate::object::ResourceIdentity;

/// A named group of kinds sharing the same priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindTier {
    /// Tier name, used in diagnostics.
    pub name: String,
    /// Kinds belonging to this tier.
    #[serde(default)]
    pub kinds: Vec<String>,
}

impl KindTier {
    /// Creates a tier from a name and a list of kinds.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns the built-in priority tiers.
#[must_use]
pub fn default_tiers() -> Vec<KindTier> {
    vec![
        KindTier::new("namespaces", ["Namespace"]),
        KindTier::new("definitions", ["CustomResourceDefinition"]),
    ]
}

/// Deterministic comparator over resources.
///
/// Resources sort by tier (unlisted kinds last), then kind name, then
/// namespace, then name. Group and version break any remaining ties so the
/// order is total.
#[derive(Debug, Clone)]
pub struct KindOrder {
    /// Priority tiers, highest priority first.
    tiers: Vec<KindTier>,
    /// Kind to tier index.
    rank: HashMap<String, usize>,
}

impl KindOrder {
    /// Builds an order from priority tiers, highest priority first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateKind`] if a kind appears in two tiers.
    pub fn new(tiers: Vec<KindTier>) -> Result<Self, ConfigError> {
        let mut rank = HashMap::new();

        for (index, tier) in tiers.iter().enumerate() {
            for kind in &tier.kinds {
                if let Some(&existing) = rank.get(kind.as_str()) {
                    let first: &KindTier = &tiers[existing];
                    return Err(ConfigError::DuplicateKind {
                        kind: kind.clone(),
                        first: first.name.clone(),
                        second: tier.name.clone(),
                    });
                }
                rank.insert(kind.clone(), index);
            }
        }

        Ok(Self { tiers, rank })
    }

    /// Returns the configured tiers.
    #[must_use]
    pub fn tiers(&self) -> &[KindTier] {
        &self.tiers
    }

    /// Returns the tier index of a kind; unlisted kinds rank after every tier.
    #[must_use]
    pub fn rank_of(&self, kind: &str) -> usize {
        self.rank.get(kind).copied().unwrap_or(self.tiers.len())
    }

    /// Compares two identities.
    #[must_use]
    pub fn compare_identities(&self, a: &ResourceIdentity, b: &ResourceIdentity) -> Ordering {
        self.rank_of(&a.kind)
            .cmp(&self.rank_of(&b.kind))
            .then_with(|| a.kind.cmp(&b.kind))
            .then_with(|| a.namespace.cmp(&b.namespace))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.group.cmp(&b.group))
    }

    /// Compares two resolved references.
    #[must_use]
    pub fn compare(&self, a: &ResolvedResourceRef, b: &ResolvedResourceRef) -> Ordering {
        self.compare_identities(&a.identity, &b.identity)
            .then_with(|| a.version.cmp(&b.version))
    }

    /// Sorts resolved references in place.
    pub fn sort(&self, refs: &mut [ResolvedResourceRef]) {
        refs.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for KindOrder {
    fn default() -> Self {
        let tiers = default_tiers();
        let rank = tiers
            .iter()
            .enumerate()
            .flat_map(|(index, tier)| tier.kinds.iter().map(move |kind| (kind.clone(), index)))
            .collect();
        Self { tiers, rank }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(group: &str, kind: &str, namespace: &str, name: &str) -> ResolvedResourceRef {
        ResolvedResourceRef::new(ResourceIdentity::new(group, kind, namespace, name), "v1")
    }

    fn kinds(refs: &[ResolvedResourceRef]) -> Vec<String> {
        refs.iter()
            .map(|r| format!("{}:{}", r.identity.kind, r.identity.name))
            .collect()
    }

    #[test]
    fn test_default_order() {
        let order = KindOrder::default();
        let mut refs = vec![
            resolved("apps", "Deployment", "ns", "web"),
            resolved("", "ConfigMap", "ns", "settings"),
            resolved("apiextensions.k8s.io", "CustomResourceDefinition", "", "widgets.example.com"),
            resolved("", "Namespace", "", "ns"),
        ];
        order.sort(&mut refs);

        assert_eq!(
            kinds(&refs),
            vec![
                "Namespace:ns",
                "CustomResourceDefinition:widgets.example.com",
                "ConfigMap:settings",
                "Deployment:web",
            ]
        );
    }

    #[test]
    fn test_same_kind_sorted_by_namespace_then_name() {
        let order = KindOrder::default();
        let mut refs = vec![
            resolved("apps", "Deployment", "b", "a"),
            resolved("apps", "Deployment", "a", "z"),
            resolved("apps", "Deployment", "a", "b"),
        ];
        order.sort(&mut refs);

        let keys: Vec<String> = refs
            .iter()
            .map(|r| format!("{}/{}", r.identity.namespace, r.identity.name))
            .collect();
        assert_eq!(keys, vec!["a/b", "a/z", "b/a"]);
    }

    #[test]
    fn test_group_breaks_ties() {
        let order = KindOrder::default();
        let a = ResourceIdentity::new("apps", "Deployment", "ns", "web");
        let b = ResourceIdentity::new("extensions", "Deployment", "ns", "web");
        assert_eq!(order.compare_identities(&a, &b), Ordering::Less);
        assert_eq!(order.compare_identities(&b, &a), Ordering::Greater);
        assert_eq!(order.compare_identities(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_custom_tiers() {
        let order = KindOrder::new(vec![
            KindTier::new("rbac", ["ServiceAccount", "Role"]),
            KindTier::new("namespaces", ["Namespace"]),
        ])
        .unwrap();

        assert_eq!(order.rank_of("Role"), 0);
        assert_eq!(order.rank_of("ServiceAccount"), 0);
        assert_eq!(order.rank_of("Namespace"), 1);
        assert_eq!(order.rank_of("Deployment"), 2);

        let mut refs = vec![
            resolved("", "Namespace", "", "ns"),
            resolved("", "ServiceAccount", "ns", "sa"),
            resolved("rbac.authorization.k8s.io", "Role", "ns", "reader"),
        ];
        order.sort(&mut refs);
        assert_eq!(kinds(&refs), vec!["Role:reader", "ServiceAccount:sa", "Namespace:ns"]);
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let err = KindOrder::new(vec![
            KindTier::new("first", ["Namespace"]),
            KindTier::new("second", ["Namespace"]),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::DuplicateKind { ref kind, ref first, ref second }
                if kind == "Namespace" && first == "first" && second == "second"
        ));
    }
}
