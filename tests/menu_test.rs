use menukit::billing::{require_item_slot, PlanTier};
use menukit::menu::{parse_menu_csv, plan_import, reorder, MenuItem};
use menukit::MenuKitError;
use rust_decimal::Decimal;

const BRUNCH_CSV: &str = "\
name,description,price,category
Shakshuka,\"Eggs, tomato, cumin\",$14.00,Mains
Avocado Toast,,12.5,Mains
\"Mimosa \"\"Classic\"\"\",Orange juice and cava,9,Drinks
Pancakes,,not-a-price,Mains
";

fn names(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn test_import_then_reorder() {
    let existing = vec![MenuItem::new("Coffee", Decimal::new(350, 2))
        .with_id("item_1")
        .with_category("Drinks")];

    let report = plan_import(PlanTier::Pro, existing.len() as u64, BRUNCH_CSV).unwrap();
    assert_eq!(report.items.len(), 3);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].line, 5);
    assert!(!report.is_clean());

    let mut menu = existing;
    menu.extend(report.items);
    assert_eq!(
        names(&menu),
        ["Coffee", "Shakshuka", "Avocado Toast", "Mimosa \"Classic\""]
    );
    let positions: Vec<u32> = menu.iter().map(|i| i.position).collect();
    assert_eq!(positions, [0, 1, 2, 3]);

    // Drag the drink next to the coffee
    reorder(&mut menu, 3, 1).unwrap();
    assert_eq!(
        names(&menu),
        ["Coffee", "Mimosa \"Classic\"", "Shakshuka", "Avocado Toast"]
    );
    assert_eq!(menu[1].position, 1);
    assert_eq!(menu[0].id.as_deref(), Some("item_1"));
}

#[test]
fn test_free_tier_adds_items_one_at_a_time() {
    let mut menu: Vec<MenuItem> = Vec::new();

    for name in ["Soup", "Salad", "Steak"] {
        require_item_slot(PlanTier::Free, menu.len() as u64).unwrap();
        let position = menu.len() as u32;
        menu.push(MenuItem::new(name, Decimal::new(900, 2)).with_position(position));
    }

    let err = require_item_slot(PlanTier::Free, menu.len() as u64).unwrap_err();
    assert!(matches!(
        err,
        MenuKitError::LimitReached { resource: "items", max: 3, tier: PlanTier::Free, .. }
    ));
    assert!(err.is_upgrade_required());
}

#[test]
fn test_bulk_import_is_pro_only() {
    let err = plan_import("starter", 0, BRUNCH_CSV).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Feature 'bulkImport' is not included in the Starter plan"
    );

    // Parsing alone is not gated, so the dashboard can preview a file
    let preview = parse_menu_csv(BRUNCH_CSV).unwrap();
    assert_eq!(preview.items.len(), 3);
    assert_eq!(preview.items[0].description.as_deref(), Some("Eggs, tomato, cumin"));
}

#[test]
fn test_imported_items_serialize_for_the_api() {
    let report = parse_menu_csv("name,price\nLatte,4.5\n").unwrap();
    let json = serde_json::to_value(&report.items[0]).unwrap();

    assert_eq!(json["name"], "Latte");
    assert_eq!(json["price"], "4.5");
    assert_eq!(json["position"], 0);
    assert!(json.get("id").is_none());
    assert!(json.get("category").is_none());
}
