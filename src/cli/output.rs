//! Output formatting for CLI commands.
//!
//! This module provides formatting utilities for displaying
//! information to the user in various formats.

use colored::Colorize;
use std::fmt::Write;
use tabled::{Table, Tabled};

use crate::inventory::{Inventory, ResolvedResourceRef};
use crate::object::ResourceIdentity;
use crate::ordering::KindOrder;

use super::commands::OutputFormat;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
}

/// Resource row for table display.
#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "API Version")]
    api_version: String,
}

/// Tier row for table display.
#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "Priority")]
    priority: usize,
    #[tabled(rename = "Tier")]
    name: String,
    #[tabled(rename = "Kinds")]
    kinds: String,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats an inventory listing.
    #[must_use]
    pub fn format_listing(&self, inventory: &Inventory, refs: &[ResolvedResourceRef]) -> String {
        match self.format {
            OutputFormat::Json => to_json(&ListingJson {
                checksum: inventory.checksum(),
                count: refs.len(),
                resources: refs.iter().map(ResourceJson::from).collect(),
            }),
            OutputFormat::Text => {
                let mut output = String::new();
                let _ = write!(
                    output,
                    "\n📦 Inventory ({} entries, checksum {})\n\n",
                    refs.len(),
                    inventory.short_checksum()
                );

                if refs.is_empty() {
                    output.push_str("   Inventory is empty.\n");
                    return output;
                }

                output.push_str(&Self::resource_table(refs));
                output.push('\n');
                output
            }
        }
    }

    /// Formats prune candidates from a diff.
    #[must_use]
    pub fn format_diff(&self, refs: &[ResolvedResourceRef]) -> String {
        match self.format {
            OutputFormat::Json => to_json(&DiffJson {
                prune_count: refs.len(),
                prune: refs.iter().map(ResourceJson::from).collect(),
            }),
            OutputFormat::Text => {
                if refs.is_empty() {
                    return format!("{} Nothing to prune - inventories are converged.\n", "✓".green());
                }

                let mut output = format!("\n{} Resources to prune:\n\n", "⚠".yellow());
                output.push_str(&Self::resource_table(refs));
                output.push('\n');
                let _ = write!(
                    output,
                    "\nPrune: {} resources\n",
                    refs.len().to_string().red()
                );
                output
            }
        }
    }

    /// Formats resolved identities, preserving their order.
    #[must_use]
    pub fn format_identities(&self, identities: &[ResourceIdentity]) -> String {
        match self.format {
            OutputFormat::Json => to_json(&identities),
            OutputFormat::Text => {
                let mut output = String::new();
                for identity in identities {
                    let _ = writeln!(output, "{identity}");
                }
                output
            }
        }
    }

    /// Formats a single identity with its encoded form.
    #[must_use]
    pub fn format_identity(&self, identity: &ResourceIdentity) -> String {
        match self.format {
            OutputFormat::Json => to_json(&IdentityJson {
                id: identity.encode(),
                identity,
            }),
            OutputFormat::Text => {
                let mut output = String::new();
                let _ = writeln!(output, "id:        {}", identity.encode());
                let _ = writeln!(output, "group:     {}", display_or_dash(&identity.group));
                let _ = writeln!(output, "kind:      {}", identity.kind);
                let _ = writeln!(output, "namespace: {}", display_or_dash(&identity.namespace));
                let _ = writeln!(output, "name:      {}", identity.name);
                output
            }
        }
    }

    /// Formats the effective kind-priority tiers.
    #[must_use]
    pub fn format_tiers(&self, order: &KindOrder) -> String {
        match self.format {
            OutputFormat::Json => to_json(&order.tiers()),
            OutputFormat::Text => {
                let mut rows: Vec<TierRow> = order
                    .tiers()
                    .iter()
                    .enumerate()
                    .map(|(i, tier)| TierRow {
                        priority: i + 1,
                        name: tier.name.clone(),
                        kinds: tier.kinds.join(", "),
                    })
                    .collect();
                rows.push(TierRow {
                    priority: rows.len() + 1,
                    name: String::from("(other)"),
                    kinds: String::from("all remaining kinds, alphabetical"),
                });

                let mut output = Table::new(rows).to_string();
                output.push('\n');
                output
            }
        }
    }

    /// Builds the resource table.
    fn resource_table(refs: &[ResolvedResourceRef]) -> String {
        let rows: Vec<ResourceRow> = refs
            .iter()
            .enumerate()
            .map(|(i, r)| ResourceRow {
                index: i + 1,
                kind: r.identity.kind.clone(),
                namespace: display_or_dash(&r.identity.namespace).to_string(),
                name: r.identity.name.clone(),
                api_version: r.api_version(),
            })
            .collect();

        Table::new(rows).to_string()
    }
}

/// Shows `-` for empty fields.
fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// Serializes a value as pretty JSON, newline-terminated.
fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_default();
    json.push('\n');
    json
}

// JSON serialization helpers

#[derive(serde::Serialize)]
struct ListingJson {
    checksum: String,
    count: usize,
    resources: Vec<ResourceJson>,
}

#[derive(serde::Serialize)]
struct DiffJson {
    prune_count: usize,
    prune: Vec<ResourceJson>,
}

#[derive(serde::Serialize)]
struct ResourceJson {
    id: String,
    api_version: String,
    kind: String,
    namespace: String,
    name: String,
}

#[derive(serde::Serialize)]
struct IdentityJson<'a> {
    id: String,
    #[serde(flatten)]
    identity: &'a ResourceIdentity,
}

impl From<&ResolvedResourceRef> for ResourceJson {
    fn from(r: &ResolvedResourceRef) -> Self {
        Self {
            id: r.identity.encode(),
            api_version: r.api_version(),
            kind: r.identity.kind.clone(),
            namespace: r.identity.namespace.clone(),
            name: r.identity.name.clone(),
        }
    }
}
