//! Plans command - print the feature matrix.

use anyhow::Result;
use colored::Colorize;
use menukit::billing::{checkout_target, features_for, limit_label, Feature, PlanTier};

use crate::cli::PlansArgs;
use crate::resolve_tier;

pub fn run(args: PlansArgs) -> Result<()> {
    let tiers: Vec<PlanTier> = match args.tier.as_deref() {
        Some(raw) => vec![resolve_tier(raw)],
        None => PlanTier::all().to_vec(),
    };

    if args.json {
        let mut matrix = serde_json::Map::new();
        for tier in &tiers {
            matrix.insert(tier.as_str().to_string(), serde_json::to_value(features_for(*tier))?);
        }
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    println!("\n{}\n", "Plan Features".cyan().bold());

    print!("{:<18}", "");
    for tier in &tiers {
        print!("{:>12}", tier.display_name().yellow().bold());
    }
    println!();

    print_row("maxMenus", &tiers, |t| limit_label(features_for(t).max_menus));
    print_row("maxItems", &tiers, |t| limit_label(features_for(t).max_items));
    for feature in Feature::all() {
        print_row(feature.name(), &tiers, |t| {
            let cell = if features_for(t).has(*feature) { "yes" } else { "-" };
            cell.to_string()
        });
    }
    print_row("checkout", &tiers, |t| checkout_target(t).unwrap_or("-").to_string());

    println!();
    Ok(())
}

fn print_row(label: &str, tiers: &[PlanTier], cell: impl Fn(PlanTier) -> String) {
    print!("{:<18}", label);
    for tier in tiers {
        print!("{:>12}", cell(*tier));
    }
    println!();
}
