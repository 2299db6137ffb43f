//! Entitlements and feature gating.
//!
//! Pure checks over the plan table. Nothing here performs I/O: callers pass
//! the current tier and usage counts, and get a decision back. Re-run the
//! check at every decision point rather than holding on to an earlier
//! answer, since the tier can change after an upgrade.

use tracing::debug;

use crate::error::{MenuKitError, Result};
use super::plans::{features_for, Feature, FeatureSet, LimitCheckResult, PlanTier};

/// Check a capability by its front-end key (e.g. `"bulkImport"`).
///
/// Unknown feature names are never granted.
#[must_use]
pub fn has_feature(tier: impl Into<PlanTier>, feature_name: &str) -> bool {
    match Feature::from_name(feature_name) {
        Some(feature) => features_for(tier).has(feature),
        None => false,
    }
}

/// Compare a menu count against the tier's menu cap.
#[must_use]
pub fn check_menu_limit(tier: impl Into<PlanTier>, current_menu_count: u64) -> LimitCheckResult {
    features_for(tier).max_menus.check(current_menu_count)
}

/// Compare an item count against the tier's per-menu item cap.
#[must_use]
pub fn check_item_limit(tier: impl Into<PlanTier>, current_item_count: u64) -> LimitCheckResult {
    features_for(tier).max_items.check(current_item_count)
}

/// Whether another menu may be created given `current_menu_count` existing ones.
#[must_use]
pub fn can_create_menu(tier: impl Into<PlanTier>, current_menu_count: u64) -> bool {
    check_menu_limit(tier, current_menu_count).is_allowed()
}

/// Whether another item may be added to a menu holding `current_item_count` items.
#[must_use]
pub fn can_add_item(tier: impl Into<PlanTier>, current_item_count: u64) -> bool {
    check_item_limit(tier, current_item_count).is_allowed()
}

/// The cheapest tier that unlocks a feature.
///
/// Useful for composing "Upgrade to Pro to unlock AI insights" prompts.
#[must_use]
pub fn required_tier(feature: Feature) -> PlanTier {
    PlanTier::all()
        .iter()
        .copied()
        .find(|tier| FeatureSet::for_tier(*tier).has(feature))
        .unwrap_or(PlanTier::Pro)
}

/// Result of gating an action on a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureCheckResult {
    /// Feature is available.
    Allowed,
    /// Feature not included in the tier; `upgrade_to` unlocks it.
    UpgradeRequired { upgrade_to: PlanTier },
}

impl FeatureCheckResult {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Check a feature, reporting which tier would unlock it when denied.
#[must_use = "feature check result must be used to enforce access control"]
pub fn check_feature(tier: impl Into<PlanTier>, feature: Feature) -> FeatureCheckResult {
    if features_for(tier).has(feature) {
        FeatureCheckResult::Allowed
    } else {
        FeatureCheckResult::UpgradeRequired {
            upgrade_to: required_tier(feature),
        }
    }
}

/// Fail with [`MenuKitError::FeatureNotIncluded`] unless the tier has `feature`.
pub fn require_feature(tier: impl Into<PlanTier>, feature: Feature) -> Result<()> {
    let tier = tier.into();
    if features_for(tier).has(feature) {
        return Ok(());
    }

    debug!(tier = %tier, feature = %feature, "feature gated");
    Err(MenuKitError::FeatureNotIncluded {
        feature: feature.name().to_string(),
        tier,
    })
}

/// Fail with [`MenuKitError::LimitReached`] unless another menu fits.
pub fn require_menu_slot(tier: impl Into<PlanTier>, current_menu_count: u64) -> Result<()> {
    let tier = tier.into();
    limit_to_result(tier, "menus", check_menu_limit(tier, current_menu_count))
}

/// Fail with [`MenuKitError::LimitReached`] unless another item fits.
pub fn require_item_slot(tier: impl Into<PlanTier>, current_item_count: u64) -> Result<()> {
    let tier = tier.into();
    limit_to_result(tier, "items", check_item_limit(tier, current_item_count))
}

fn limit_to_result(tier: PlanTier, resource: &'static str, check: LimitCheckResult) -> Result<()> {
    match check {
        LimitCheckResult::Unlimited | LimitCheckResult::WithinLimit { .. } => Ok(()),
        LimitCheckResult::AtLimit { current, max } => {
            debug!(tier = %tier, resource, current, max, "limit reached");
            Err(MenuKitError::LimitReached {
                resource,
                current,
                max,
                tier,
            })
        }
    }
}
