//! Inventory module.
//!
//! This module holds the record of applied resources and the operations
//! reconciliation runs against it:
//! - Building an inventory from apply results
//! - Listing entries in dependency-safe order
//! - Diffing two inventories to find prune candidates

mod builder;
mod checksum;
mod diff;
mod lister;
mod types;

pub use diff::{DiffEngine, ExclusionSet};
pub use lister::{Lister, list_identities};
pub use types::{
    ChangeAction, ChangeSet, ChangeSetEntry, Inventory, ResolvedResourceRef, ResourceRef,
};

use crate::error::Result;

/// Lists an inventory with the default kind order.
///
/// # Errors
///
/// Returns an invalid identifier error if any entry is malformed.
pub fn list(inventory: &Inventory) -> Result<Vec<ResolvedResourceRef>> {
    Lister::default().list(inventory)
}

/// Diffs two inventories with the default kind order.
///
/// # Errors
///
/// Returns an invalid identifier error if either inventory holds a malformed entry.
pub fn diff(
    source: &Inventory,
    target: &Inventory,
    exclusions: &ExclusionSet,
) -> Result<Vec<ResolvedResourceRef>> {
    DiffEngine::default().diff(source, target, exclusions)
}
