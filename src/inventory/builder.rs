//! Inventory construction from apply results.

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::error::Result;

use super::types::{ChangeSet, Inventory, ResourceRef};

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Creates an inventory holding one entry per change set entry.
    ///
    /// # Errors
    ///
    /// Returns an invalid identifier error if any entry cannot be encoded.
    pub fn from_change_set(set: &ChangeSet) -> Result<Self> {
        let mut inventory = Self::new();
        inventory.ingest(Some(set))?;
        Ok(inventory)
    }

    /// Appends one entry per applied resource, in batch order.
    ///
    /// Existing entries are never removed or merged. Re-recording an
    /// identity keeps both entries and logs a warning; lookups resolve
    /// duplicates to the first entry. `None` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an invalid identifier error if any identity in the batch
    /// cannot be encoded and decoded back. Nothing is recorded in that case.
    pub fn ingest(&mut self, set: Option<&ChangeSet>) -> Result<()> {
        let Some(set) = set else {
            return Ok(());
        };

        for entry in &set.entries {
            entry.identity.validate()?;
        }

        let mut seen: HashSet<String> = self.entries.iter().map(|e| e.id.clone()).collect();
        self.entries.reserve(set.entries.len());

        for entry in &set.entries {
            let reference = ResourceRef::new(&entry.identity, entry.version.as_str());
            debug!("Recording {} ({})", reference.id, entry.action);
            if !seen.insert(reference.id.clone()) {
                warn!(
                    "Inventory already records {}; keeping the first entry for lookups",
                    reference.id
                );
            }
            self.entries.push(reference);
        }

        debug!(
            "Ingested {} applied resources ({} entries total)",
            set.entries.len(),
            self.entries.len()
        );
        Ok(())
    }
}
