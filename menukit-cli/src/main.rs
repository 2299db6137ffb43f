//! menukit CLI - inspect plan entitlements and dry-run menu imports.
//!
//! Usage:
//!   menukit plans --tier starter
//!   menukit check --tier free --menus 1 --items 2 --feature analytics
//!   menukit import menu.csv --tier pro --existing-items 12

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use menukit::{ConfigBuilder, PlanTier};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = ConfigBuilder::new().from_env();
    if cli.verbose {
        builder = builder.with_log_level("debug");
    }
    let config = builder.build()?;
    menukit::init_tracing_with_config(&config);

    match cli.command {
        Commands::Plans(args) => commands::plans::run(args)?,
        Commands::Check(args) => commands::check::run(args)?,
        Commands::Import(args) => commands::import::run(args)?,
    }

    Ok(())
}

/// Resolve a tier argument, warning when it falls back to free.
pub fn resolve_tier(raw: &str) -> PlanTier {
    match raw.parse() {
        Ok(tier) => tier,
        Err(e) => {
            print_warning(&format!("{}; treating as free", e));
            PlanTier::Free
        }
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "→".blue(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "!".yellow().bold(), message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}
