// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::todo)]                // TODO warning
#![warn(clippy::unimplemented)]       // unimplemented!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Kube Inventory
//!
//! Bookkeeping for reconciliation loops: records which resources a cycle
//! applied and computes which of them the next cycle must prune.
//!
//! ## Overview
//!
//! A reconciler that applies manifests to a cluster needs to remember what
//! it created, otherwise resources dropped from the desired state linger
//! as orphans. This crate provides:
//!
//! - A stable, persisted string encoding of resource identities
//! - An inventory built from the apply results of one cycle
//! - Dependency-safe ordering of inventory entries
//! - The diff between two inventories, honouring an exclusion set
//! - Resolution of loosely typed dependency references
//!
//! ## Modules
//!
//! - [`object`]: Resource identities, API versions, reference resolution
//! - [`inventory`]: Inventory records, ingestion, listing, diffing
//! - [`ordering`]: Kind-priority comparator
//! - [`config`]: Configuration parsing and validation
//! - [`cli`]: Command-line interface
//!
//! ## Example
//!
//! ```
//! use kube_inventory::inventory::{self, ChangeSet, ChangeSetEntry, ExclusionSet, Inventory};
//! use kube_inventory::object::ResourceIdentity;
//!
//! let web = ResourceIdentity::new("apps", "Deployment", "prod", "web");
//! let api = ResourceIdentity::new("apps", "Deployment", "prod", "api");
//!
//! let previous = Inventory::from_change_set(&ChangeSet::from_iter([
//!     ChangeSetEntry::new(web.clone(), "v1"),
//!     ChangeSetEntry::new(api.clone(), "v1"),
//! ]))
//! .unwrap();
//! let current = Inventory::from_change_set(&ChangeSet::from_iter([
//!     ChangeSetEntry::new(web, "v1"),
//! ]))
//! .unwrap();
//!
//! let prune = inventory::diff(&previous, &current, &ExclusionSet::new()).unwrap();
//! assert_eq!(prune.len(), 1);
//! assert_eq!(prune[0].identity, api);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod object;
pub mod ordering;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, Commands, OutputFormatter};
pub use config::{ConfigParser, ConfigValidator, InventoryConfig};
pub use error::{InventoryError, Result};
pub use inventory::{
    ChangeSet, ChangeSetEntry, DiffEngine, ExclusionSet, Inventory, Lister, ResolvedResourceRef,
    ResourceRef,
};
pub use object::{ExternalReference, ResourceIdentity, resolve_references};
pub use ordering::{KindOrder, KindTier};
