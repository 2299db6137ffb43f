use menukit::billing::{
    can_add_item, can_create_menu, checkout_target, features_for, has_feature, limit_label,
    Feature, FeatureSet, Limit, PlanTier,
};

const TIER_INPUTS: &[&str] = &["free", "starter", "pro", "bogus-tier", "", "PRO", "enterprise"];

#[test]
fn test_every_tier_input_resolves_to_a_table_row() {
    let rows: Vec<FeatureSet> = PlanTier::all().iter().map(|t| features_for(*t)).collect();

    for input in TIER_INPUTS {
        let features = features_for(*input);
        assert!(rows.contains(&features), "no table row for {:?}", input);
    }
}

#[test]
fn test_unknown_tier_equals_free() {
    assert_eq!(features_for("bogus-tier"), features_for("free"));
    assert_eq!(features_for(""), features_for(PlanTier::Free));
    // Tier strings are case sensitive; near misses are not upgraded.
    assert_eq!(features_for("Pro"), features_for("free"));
}

#[test]
fn test_starter_and_pro_shared_features() {
    let shared = [
        "removeWatermark",
        "photoUploads",
        "analytics",
        "customBranding",
        "locations",
        "templates",
    ];
    for feature in shared {
        assert!(has_feature("starter", feature), "starter lacks {}", feature);
        assert!(has_feature("pro", feature), "pro lacks {}", feature);
        assert!(!has_feature("free", feature), "free has {}", feature);
    }

    for feature in ["aiInsights", "bulkImport"] {
        assert!(has_feature("pro", feature));
        assert!(!has_feature("starter", feature));
        assert!(!has_feature("free", feature));
    }
}

#[test]
fn test_pro_is_a_superset_of_starter() {
    for feature in Feature::all() {
        if features_for(PlanTier::Starter).has(*feature) {
            assert!(features_for(PlanTier::Pro).has(*feature), "{}", feature);
        }
        if features_for(PlanTier::Free).has(*feature) {
            assert!(features_for(PlanTier::Starter).has(*feature), "{}", feature);
        }
    }
}

#[test]
fn test_menu_limit_boundary() {
    assert_eq!(features_for("free").max_menus, Limit::Capped(1));
    assert!(can_create_menu("free", 0));
    assert!(!can_create_menu("free", 1));
    assert!(can_create_menu("pro", 1_000_000));
    assert!(!can_create_menu("bogus-tier", 1));
}

#[test]
fn test_item_limit_boundary() {
    assert_eq!(features_for("free").max_items, Limit::Capped(3));
    assert!(can_add_item("free", 2));
    assert!(!can_add_item("free", 3));
    assert!(can_add_item("starter", 999));
    assert!(can_add_item("pro", u64::MAX));
}

#[test]
fn test_features_for_is_idempotent() {
    for input in TIER_INPUTS {
        assert_eq!(features_for(*input), features_for(*input));
    }
}

#[test]
fn test_checkout_mapping() {
    assert_eq!(checkout_target("free"), None);
    assert_eq!(checkout_target("bogus-tier"), None);

    let starter = checkout_target("starter").expect("starter has a checkout");
    let pro = checkout_target("pro").expect("pro has a checkout");
    assert_ne!(starter, pro);
    assert!(!starter.is_empty());
    assert!(!pro.is_empty());
}

#[test]
fn test_limit_labels() {
    assert_eq!(limit_label(Limit::Unlimited), "Unlimited");
    assert_eq!(limit_label(Limit::Capped(5)), "5");
    assert_eq!(limit_label(features_for("starter").max_items), "Unlimited");
    assert_eq!(limit_label(features_for("free").max_menus), "1");
}

#[test]
fn test_unknown_feature_name_is_denied() {
    for tier in PlanTier::all() {
        assert!(!has_feature(*tier, "freeLunch"));
        assert!(!has_feature(*tier, ""));
    }
}
