//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "menukit")]
#[command(version)]
#[command(about = "Inspect plan entitlements and dry-run menu imports", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the feature matrix for every plan (or one)
    Plans(PlansArgs),

    /// Evaluate entitlement decisions for a tier
    Check(CheckArgs),

    /// Parse a CSV file the way bulk import would
    Import(ImportArgs),
}

#[derive(Args, Debug)]
pub struct PlansArgs {
    /// Only show this tier (free, starter, pro)
    #[arg(short, long)]
    pub tier: Option<String>,

    /// Print JSON instead of a table
    #[arg(long, default_value = "false")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Plan tier as reported by the identity provider
    #[arg(short, long)]
    pub tier: String,

    /// Number of menus the account already has
    #[arg(long)]
    pub menus: Option<u64>,

    /// Number of items already on the menu
    #[arg(long)]
    pub items: Option<u64>,

    /// Feature to check (e.g. bulkImport); may be repeated
    #[arg(short, long = "feature")]
    pub features: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file with a name,price header
    pub file: PathBuf,

    /// Plan tier as reported by the identity provider
    #[arg(short, long)]
    pub tier: String,

    /// Number of items already on the target menu
    #[arg(long, default_value = "0")]
    pub existing_items: u64,

    /// Print the accepted items as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}
