//! Import command - dry-run a CSV bulk import.

use anyhow::{Context, Result};
use colored::Colorize;
use menukit::menu::plan_import;

use crate::cli::ImportArgs;
use crate::{print_info, print_success, print_warning, resolve_tier};

pub fn run(args: ImportArgs) -> Result<()> {
    let tier = resolve_tier(&args.tier);
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let report = plan_import(tier, args.existing_items, &text)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.items)?);
    } else {
        println!("\n{} {}\n", "Import:".cyan().bold(), args.file.display());
        for item in &report.items {
            print_info(&format!(
                "#{:<3} {} {}",
                item.position,
                item.name,
                format!("${}", item.price).dimmed()
            ));
        }
        println!();
        print_success(&format!("{} item(s) ready to import", report.items.len()));
    }

    for error in &report.errors {
        print_warning(&error.to_string());
    }
    if report.skipped_over_limit > 0 {
        print_warning(&format!(
            "{} item(s) skipped: the {} plan's item limit was reached",
            report.skipped_over_limit, tier
        ));
    }

    Ok(())
}
