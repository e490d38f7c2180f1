//! Resource identity module.
//!
//! This module defines how resources are identified:
//! - Encoding and decoding persisted identifiers
//! - Parsing API group/version strings
//! - Resolving external dependency references into identities

mod group_version;
mod identity;
mod reference;

pub use group_version::GroupVersion;
pub use identity::{ID_FORMAT_VERSION, ResourceIdentity};
pub use reference::{ExternalReference, LEGACY_API_VERSION, resolve_references};
