//! Check command - evaluate entitlement decisions for a tier.

use anyhow::{bail, Result};
use colored::Colorize;
use menukit::billing::{
    check_feature, check_item_limit, check_menu_limit, checkout_target, Feature,
    FeatureCheckResult, LimitCheckResult,
};

use crate::cli::CheckArgs;
use crate::{print_error, print_info, print_success, resolve_tier};

pub fn run(args: CheckArgs) -> Result<()> {
    let tier = resolve_tier(&args.tier);
    println!("\n{} {}\n", "Plan:".cyan().bold(), tier);

    let mut denied = 0;

    if let Some(menus) = args.menus {
        if !report_limit("create a menu", check_menu_limit(tier, menus)) {
            denied += 1;
        }
    }

    if let Some(items) = args.items {
        if !report_limit("add an item", check_item_limit(tier, items)) {
            denied += 1;
        }
    }

    for name in &args.features {
        let Some(feature) = Feature::from_name(name) else {
            print_error(&format!("{}: unknown feature", name));
            denied += 1;
            continue;
        };

        match check_feature(tier, feature) {
            FeatureCheckResult::Allowed => print_success(&format!("{} is included", feature)),
            FeatureCheckResult::UpgradeRequired { upgrade_to } => {
                print_error(&format!("{} requires the {} plan", feature, upgrade_to));
                if let Some(target) = checkout_target(upgrade_to) {
                    print_info(&format!("checkout: {}", target));
                }
                denied += 1;
            }
        }
    }

    println!();
    if denied > 0 {
        bail!("{} check(s) denied", denied);
    }
    Ok(())
}

fn report_limit(action: &str, check: LimitCheckResult) -> bool {
    match check {
        LimitCheckResult::Unlimited => {
            print_success(&format!("can {} (unlimited)", action));
            true
        }
        LimitCheckResult::WithinLimit { current, max } => {
            print_success(&format!("can {} ({} of {} used)", action, current, max));
            true
        }
        LimitCheckResult::AtLimit { current, max } => {
            print_error(&format!("cannot {} ({} of {} used)", action, current, max));
            false
        }
    }
}
