//! kinv CLI entrypoint.
//!
//! This is the main entrypoint for the kinv command-line tool.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use kube_inventory::cli::{
    Cli, Commands, IdCommands, OutputFormatter, load_change_set, load_exclusions,
    load_inventory, load_references,
};
use kube_inventory::config::{ConfigParser, ConfigValidator};
use kube_inventory::error::{InventoryError, Result};
use kube_inventory::inventory::{DiffEngine, Inventory, Lister};
use kube_inventory::object::{ResourceIdentity, resolve_references};
use kube_inventory::ordering::KindOrder;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatches the selected command.
fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.output);

    match cli.command {
        Commands::List { inventory } => cmd_list(cli.config.as_ref(), &inventory, &formatter),
        Commands::Diff {
            source,
            target,
            excludes,
            exclude_file,
        } => cmd_diff(
            cli.config.as_ref(),
            &source,
            &target,
            &excludes,
            exclude_file.as_deref(),
            &formatter,
        ),
        Commands::Resolve { references } => cmd_resolve(&references, &formatter),
        Commands::Ingest { change_set, into } => cmd_ingest(&change_set, into.as_deref()),
        Commands::Id { command } => cmd_id(command, &formatter),
        Commands::Tiers => cmd_tiers(cli.config.as_ref(), &formatter),
    }
}

/// List an inventory.
fn cmd_list(config_path: Option<&PathBuf>, path: &Path, formatter: &OutputFormatter) -> Result<()> {
    let order = load_kind_order(config_path)?;
    let inventory = load_inventory(path)?;

    let refs = Lister::new(order).list(&inventory)?;
    print!("{}", formatter.format_listing(&inventory, &refs));

    Ok(())
}

/// Diff two inventories.
fn cmd_diff(
    config_path: Option<&PathBuf>,
    source: &Path,
    target: &Path,
    excludes: &[String],
    exclude_file: Option<&Path>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let order = load_kind_order(config_path)?;
    let source_inventory = load_inventory(source)?;
    let target_inventory = load_inventory(target)?;
    let exclusions = load_exclusions(excludes, exclude_file)?;

    info!(
        "Diffing {} ({} entries) against {} ({} entries)",
        source.display(),
        source_inventory.len(),
        target.display(),
        target_inventory.len()
    );

    let prune = DiffEngine::new(order).diff(&source_inventory, &target_inventory, &exclusions)?;
    print!("{}", formatter.format_diff(&prune));

    Ok(())
}

/// Resolve dependency references.
fn cmd_resolve(path: &Path, formatter: &OutputFormatter) -> Result<()> {
    let references = load_references(path)?;
    let identities = resolve_references(&references)?;
    print!("{}", formatter.format_identities(&identities));

    Ok(())
}

/// Build an inventory from a change set.
fn cmd_ingest(change_set_path: &Path, into: Option<&Path>) -> Result<()> {
    let change_set = load_change_set(change_set_path)?;
    let mut inventory = into.map_or_else(|| Ok(Inventory::new()), load_inventory)?;

    inventory.ingest(Some(&change_set))?;
    info!(
        "Inventory holds {} entries (checksum {})",
        inventory.len(),
        inventory.short_checksum()
    );

    let document = serde_json::to_string_pretty(&inventory)
        .map_err(|e| InventoryError::internal(format!("Failed to serialize inventory: {e}")))?;
    println!("{document}");

    Ok(())
}

/// Encode or decode identifiers.
fn cmd_id(command: IdCommands, formatter: &OutputFormatter) -> Result<()> {
    let identity = match command {
        IdCommands::Encode {
            name,
            kind,
            namespace,
            group,
        } => {
            let identity = ResourceIdentity::new(group, kind, namespace, name);
            identity.validate()?;
            identity
        }
        IdCommands::Decode { id } => ResourceIdentity::decode(&id)?,
    };

    print!("{}", formatter.format_identity(&identity));
    Ok(())
}

/// Show the effective kind-priority tiers.
fn cmd_tiers(config_path: Option<&PathBuf>, formatter: &OutputFormatter) -> Result<()> {
    let order = load_kind_order(config_path)?;
    print!("{}", formatter.format_tiers(&order));
    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Loads configuration and builds the kind order.
fn load_kind_order(config_path: Option<&PathBuf>) -> Result<KindOrder> {
    let config = ConfigParser::new().load_with_env(config_path.map(PathBuf::as_path))?;

    let validation = ConfigValidator::new().validate(&config)?;
    for warning in &validation.warnings {
        warn!("{warning}");
    }

    let order = config.kind_order()?;
    debug!("Using {} ordering tiers", order.tiers().len());
    Ok(order)
}
