//! Projection of an inventory into ordered resource references.

use tracing::debug;

use crate::error::Result;
use crate::object::ResourceIdentity;
use crate::ordering::KindOrder;

use super::types::{Inventory, ResolvedResourceRef};

/// Lists inventory entries in kind-priority order.
#[derive(Debug, Clone, Default)]
pub struct Lister {
    /// Sort order applied to listings.
    order: KindOrder,
}

impl Lister {
    /// Creates a lister with the given order.
    #[must_use]
    pub const fn new(order: KindOrder) -> Self {
        Self { order }
    }

    /// Decodes every entry and returns them sorted.
    ///
    /// # Errors
    ///
    /// Returns an invalid identifier error if any entry is malformed; no
    /// partial listing is returned.
    pub fn list(&self, inventory: &Inventory) -> Result<Vec<ResolvedResourceRef>> {
        let mut refs = inventory
            .entries()
            .iter()
            .map(|entry| {
                ResourceIdentity::decode(&entry.id)
                    .map(|identity| ResolvedResourceRef::new(identity, entry.version.as_str()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        self.order.sort(&mut refs);
        debug!("Listed {} inventory entries", refs.len());
        Ok(refs)
    }
}

/// Decodes every entry's identity in entry order, without sorting.
///
/// # Errors
///
/// Returns an invalid identifier error on the first malformed entry.
pub fn list_identities(inventory: &Inventory) -> Result<Vec<ResourceIdentity>> {
    let identities = inventory
        .entries()
        .iter()
        .map(|entry| ResourceIdentity::decode(&entry.id))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(identities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InventoryError, ObjectError};
    use crate::inventory::ResourceRef;

    fn inventory(ids: &[&str]) -> Inventory {
        Inventory {
            entries: ids
                .iter()
                .map(|id| ResourceRef {
                    id: (*id).to_string(),
                    version: String::from("v1"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_list_sorted_by_kind_priority() {
        let inv = inventory(&[
            "ns/web/apps/Deployment",
            "/ns//Namespace",
            "ns/settings//ConfigMap",
            "/widgets.example.com/apiextensions.k8s.io/CustomResourceDefinition",
        ]);

        let listed = Lister::default().list(&inv).unwrap();
        let kinds: Vec<&str> = listed.iter().map(|r| r.identity.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec!["Namespace", "CustomResourceDefinition", "ConfigMap", "Deployment"]
        );
    }

    #[test]
    fn test_list_empty_inventory() {
        let listed = Lister::default().list(&Inventory::new()).unwrap();
        assert!(listed.is_empty());
    }

    #[test]
    fn test_list_fails_on_any_malformed_entry() {
        let inv = inventory(&["ns/web/apps/Deployment", "garbage"]);
        let err = Lister::default().list(&inv).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Object(ObjectError::InvalidIdentifier { ref id, .. }) if id == "garbage"
        ));
    }

    #[test]
    fn test_list_is_deterministic() {
        let inv = inventory(&[
            "b/x/apps/Deployment",
            "a/x/apps/Deployment",
            "a/y//Service",
            "a/x//Service",
        ]);
        let lister = Lister::default();
        assert_eq!(lister.list(&inv).unwrap(), lister.list(&inv).unwrap());
    }

    #[test]
    fn test_list_identities_keeps_entry_order() {
        let inv = inventory(&["ns/b/apps/Deployment", "/ns//Namespace"]);
        let ids = list_identities(&inv).unwrap();
        assert_eq!(ids[0].name, "b");
        assert_eq!(ids[1].kind, "Namespace");
    }
}
