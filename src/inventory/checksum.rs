//! Inventory checksums for change detection.
//!
//! The checksum ignores entry order, so two cycles that applied the same
//! resources in a different order produce the same value.

use sha2::{Digest, Sha256};

use super::types::Inventory;

impl Inventory {
    /// Computes a hex SHA-256 checksum over the sorted entries.
    #[must_use]
    pub fn checksum(&self) -> String {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|e| (e.id.as_str(), e.version.as_str()))
            .collect();
        entries.sort_unstable();

        let mut hasher = Sha256::new();
        for (id, version) in entries {
            hasher.update(id.as_bytes());
            hasher.update([0u8]);
            hasher.update(version.as_bytes());
            hasher.update([b'\n']);
        }

        hex::encode(hasher.finalize())
    }

    /// Returns the first eight characters of the checksum for display.
    #[must_use]
    pub fn short_checksum(&self) -> String {
        self.checksum().chars().take(8).collect()
    }
}
