//! CLI module for the kinv tool.
//!
//! This module provides the command-line interface for inspecting
//! and diffing inventories.

mod commands;
mod input;
mod output;

pub use commands::{Cli, Commands, IdCommands, OutputFormat};
pub use input::{load_change_set, load_document, load_exclusions, load_inventory, load_references};
pub use output::OutputFormatter;
