//! Plan tiers, entitlements, and upgrade checkouts.
//!
//! Every check in this module is a pure function of the plan tier (and, for
//! limits, a usage count supplied by the caller). The only state is the
//! session-scoped tier cache in [`session`].
//!
//! # Example
//!
//! ```rust
//! use menukit::billing::{can_add_item, can_create_menu, checkout_target, has_feature, PlanTier};
//!
//! let tier = PlanTier::from_str_lossy("starter");
//!
//! assert!(can_create_menu(tier, 2));
//! assert!(can_add_item(tier, 999));
//! assert!(has_feature(tier, "customBranding"));
//! assert!(!has_feature(tier, "aiInsights"));
//!
//! // Offer the pro checkout for AI insights
//! assert!(checkout_target(PlanTier::Pro).is_some());
//! assert!(checkout_target(PlanTier::Free).is_none());
//! ```

pub mod checkout;
pub mod entitlements;
pub mod plans;
pub mod session;

// Plan exports
pub use plans::{
    features_for, limit_label, Feature, FeatureSet, Limit, LimitCheckResult, PlanTier, UnknownTier,
};

// Entitlement exports
pub use entitlements::{
    can_add_item, can_create_menu, check_feature, check_item_limit, check_menu_limit, has_feature,
    require_feature, require_item_slot, require_menu_slot, required_tier, FeatureCheckResult,
};

// Checkout exports
pub use checkout::{
    checkout_target, CheckoutConfig, CheckoutTargets, DEFAULT_CHECKOUT_BASE_URL, PRO_CHECKOUT_ID,
    STARTER_CHECKOUT_ID,
};

// Session exports
pub use session::{PlanSession, PlanSource};

#[cfg(any(test, feature = "test-session"))]
pub use session::test::InMemoryPlanSource;
