//! CLI command definitions.
//!
//! This module defines all CLI commands and their arguments using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kinv - Inspect and diff reconciliation inventories.
#[derive(Parser, Debug)]
#[command(name = "kinv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, env = "KINV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List inventory entries in apply order.
    List {
        /// Inventory document (JSON or YAML).
        inventory: PathBuf,
    },

    /// Show resources recorded in SOURCE but absent from TARGET.
    Diff {
        /// Previous inventory document.
        source: PathBuf,

        /// Current inventory document.
        target: PathBuf,

        /// Encoded identifier to exclude from pruning (repeatable).
        #[arg(short, long = "exclude", value_name = "ID")]
        excludes: Vec<String>,

        /// File with one encoded identifier per line to exclude.
        #[arg(long)]
        exclude_file: Option<PathBuf>,
    },

    /// Resolve dependency references into resource identities.
    Resolve {
        /// Reference list document (JSON or YAML).
        references: PathBuf,
    },

    /// Build an inventory from an apply result batch.
    Ingest {
        /// Change set document (JSON or YAML).
        change_set: PathBuf,

        /// Existing inventory to extend instead of starting empty.
        #[arg(long)]
        into: Option<PathBuf>,
    },

    /// Encode or decode resource identifiers.
    Id {
        /// Identifier subcommand.
        #[command(subcommand)]
        command: IdCommands,
    },

    /// Show the effective kind-priority tiers.
    Tiers,
}

/// Identifier subcommands.
#[derive(Subcommand, Debug)]
pub enum IdCommands {
    /// Encode an identity into its persisted form.
    Encode {
        /// Resource name.
        #[arg(long)]
        name: String,

        /// Resource kind.
        #[arg(long)]
        kind: String,

        /// Namespace (omit for cluster-scoped resources).
        #[arg(long, default_value = "")]
        namespace: String,

        /// API group (omit for the core group).
        #[arg(long, default_value = "")]
        group: String,
    },

    /// Decode a persisted identifier.
    Decode {
        /// Encoded identifier.
        id: String,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_diff_with_excludes() {
        let cli = Cli::try_parse_from([
            "kinv",
            "diff",
            "old.json",
            "new.json",
            "--exclude",
            "ns/a/apps/Deployment",
            "-e",
            "ns/b/apps/Deployment",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Commands::Diff { excludes, exclude_file, .. } => {
                assert_eq!(excludes.len(), 2);
                assert!(exclude_file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_id_encode_defaults() {
        let cli = Cli::try_parse_from(["kinv", "id", "encode", "--name", "ns", "--kind", "Namespace"]).unwrap();
        match cli.command {
            Commands::Id {
                command: IdCommands::Encode { namespace, group, .. },
            } => {
                assert!(namespace.is_empty());
                assert!(group.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
