//! Plan tiers and the feature table.
//!
//! Every tier has a fully populated [`FeatureSet`]. The table is fixed at
//! compile time; a tier's features are looked up on every read instead of
//! being cached alongside session state.
//!
//! | Field            | free | starter   | pro       |
//! |------------------|------|-----------|-----------|
//! | max_menus        | 1    | 3         | Unlimited |
//! | max_items        | 3    | Unlimited | Unlimited |
//! | remove_watermark | no   | yes       | yes       |
//! | photo_uploads    | no   | yes       | yes       |
//! | analytics        | no   | yes       | yes       |
//! | custom_branding  | no   | yes       | yes       |
//! | ai_insights      | no   | no        | yes       |
//! | bulk_import      | no   | no        | yes       |
//! | locations        | no   | yes       | yes       |
//! | templates        | no   | yes       | yes       |
//!
//! ```rust
//! use menukit::billing::{features_for, limit_label, PlanTier};
//!
//! let free = features_for("free");
//! assert_eq!(limit_label(free.max_items), "3");
//!
//! // Anything unrecognised resolves to the free row.
//! assert_eq!(features_for("platinum"), free);
//! assert_eq!(features_for(PlanTier::Pro).max_menus.to_string(), "Unlimited");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A subscription level.
///
/// Deserializing never fails on the tier name: unrecognised values come back
/// as [`PlanTier::Free`], the same as [`PlanTier::from_str_lossy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PlanTier {
    #[default]
    Free,
    Starter,
    Pro,
}

impl PlanTier {
    /// All tiers, cheapest first.
    #[must_use]
    pub fn all() -> &'static [PlanTier] {
        &[Self::Free, Self::Starter, Self::Pro]
    }

    /// Identifier used by the identity provider ("free", "starter", "pro").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Starter => "starter",
            Self::Pro => "pro",
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Starter => "Starter",
            Self::Pro => "Pro",
        }
    }

    /// Resolve a tier string, treating anything unrecognised as [`PlanTier::Free`].
    ///
    /// Use [`str::parse`] instead when "unknown" must be told apart from "free".
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Free)
    }

    /// Whether this tier sits at or above `other`.
    #[must_use]
    pub fn includes(&self, other: PlanTier) -> bool {
        *self >= other
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned by the strict tier parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan tier: {0}")]
pub struct UnknownTier(pub String);

impl FromStr for PlanTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "starter" => Ok(Self::Starter),
            "pro" => Ok(Self::Pro),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

impl From<&str> for PlanTier {
    fn from(s: &str) -> Self {
        Self::from_str_lossy(s)
    }
}

impl From<String> for PlanTier {
    fn from(s: String) -> Self {
        Self::from_str_lossy(&s)
    }
}

impl From<Option<&str>> for PlanTier {
    fn from(s: Option<&str>) -> Self {
        s.map(Self::from_str_lossy).unwrap_or_default()
    }
}

/// A numeric cap, or no cap at all.
///
/// Serializes as a number, or `null` for unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Limit {
    Capped(u32),
    Unlimited,
}

impl Limit {
    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// The cap, if any.
    #[must_use]
    pub fn max(&self) -> Option<u32> {
        match self {
            Self::Capped(max) => Some(*max),
            Self::Unlimited => None,
        }
    }

    /// Compare current usage against this limit.
    #[must_use]
    pub fn check(&self, current: u64) -> LimitCheckResult {
        match self.max().map(u64::from) {
            None => LimitCheckResult::Unlimited,
            Some(max) if current < max => LimitCheckResult::WithinLimit { current, max },
            Some(max) => LimitCheckResult::AtLimit { current, max },
        }
    }
}

impl From<Option<u32>> for Limit {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Unlimited, Self::Capped)
    }
}

impl From<Limit> for Option<u32> {
    fn from(limit: Limit) -> Self {
        limit.max()
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capped(max) => write!(f, "{}", max),
            Self::Unlimited => f.write_str(UNLIMITED_LABEL),
        }
    }
}

const UNLIMITED_LABEL: &str = "Unlimited";

/// Format a limit for display: `"Unlimited"` or the number itself.
#[must_use]
pub fn limit_label(limit: Limit) -> String {
    limit.to_string()
}

/// Result of checking usage against a limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LimitCheckResult {
    /// No limit on this resource.
    Unlimited,
    /// Usage is below the limit.
    WithinLimit { current: u64, max: u64 },
    /// Usage has reached or exceeded the limit.
    AtLimit { current: u64, max: u64 },
}

impl LimitCheckResult {
    /// Whether one more unit may be created.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Unlimited | Self::WithinLimit { .. })
    }

    #[must_use]
    pub fn is_at_limit(&self) -> bool {
        matches!(self, Self::AtLimit { .. })
    }

    /// How many more units fit, or `None` when unlimited.
    #[must_use]
    pub fn remaining(&self) -> Option<u64> {
        match self {
            Self::Unlimited => None,
            Self::WithinLimit { current, max } | Self::AtLimit { current, max } => {
                Some(max.saturating_sub(*current))
            }
        }
    }
}

/// A boolean capability gated by plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    RemoveWatermark,
    PhotoUploads,
    Analytics,
    CustomBranding,
    AiInsights,
    BulkImport,
    Locations,
    Templates,
}

impl Feature {
    #[must_use]
    pub fn all() -> &'static [Feature] {
        &[
            Self::RemoveWatermark,
            Self::PhotoUploads,
            Self::Analytics,
            Self::CustomBranding,
            Self::AiInsights,
            Self::BulkImport,
            Self::Locations,
            Self::Templates,
        ]
    }

    /// The camelCase key the front-end uses for this capability.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::RemoveWatermark => "removeWatermark",
            Self::PhotoUploads => "photoUploads",
            Self::Analytics => "analytics",
            Self::CustomBranding => "customBranding",
            Self::AiInsights => "aiInsights",
            Self::BulkImport => "bulkImport",
            Self::Locations => "locations",
            Self::Templates => "templates",
        }
    }

    /// Look up a feature by its camelCase or snake_case key.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let feature = match name {
            "removeWatermark" | "remove_watermark" => Self::RemoveWatermark,
            "photoUploads" | "photo_uploads" => Self::PhotoUploads,
            "analytics" => Self::Analytics,
            "customBranding" | "custom_branding" => Self::CustomBranding,
            "aiInsights" | "ai_insights" => Self::AiInsights,
            "bulkImport" | "bulk_import" => Self::BulkImport,
            "locations" => Self::Locations,
            "templates" => Self::Templates,
            _ => return None,
        };
        Some(feature)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The capabilities and limits of one plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    /// Maximum number of menus.
    pub max_menus: Limit,
    /// Maximum number of items per menu.
    pub max_items: Limit,
    /// Public menu page hides the attribution mark.
    pub remove_watermark: bool,
    pub photo_uploads: bool,
    pub analytics: bool,
    pub custom_branding: bool,
    pub ai_insights: bool,
    pub bulk_import: bool,
    /// Multi-location management.
    pub locations: bool,
    /// Template gallery.
    pub templates: bool,
}

impl FeatureSet {
    /// The table row for a tier.
    #[must_use]
    pub const fn for_tier(tier: PlanTier) -> Self {
        match tier {
            PlanTier::Free => Self {
                max_menus: Limit::Capped(1),
                max_items: Limit::Capped(3),
                remove_watermark: false,
                photo_uploads: false,
                analytics: false,
                custom_branding: false,
                ai_insights: false,
                bulk_import: false,
                locations: false,
                templates: false,
            },
            PlanTier::Starter => Self {
                max_menus: Limit::Capped(3),
                max_items: Limit::Unlimited,
                remove_watermark: true,
                photo_uploads: true,
                analytics: true,
                custom_branding: true,
                ai_insights: false,
                bulk_import: false,
                locations: true,
                templates: true,
            },
            PlanTier::Pro => Self {
                max_menus: Limit::Unlimited,
                max_items: Limit::Unlimited,
                remove_watermark: true,
                photo_uploads: true,
                analytics: true,
                custom_branding: true,
                ai_insights: true,
                bulk_import: true,
                locations: true,
                templates: true,
            },
        }
    }

    /// Check a single capability.
    #[must_use]
    pub fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::RemoveWatermark => self.remove_watermark,
            Feature::PhotoUploads => self.photo_uploads,
            Feature::Analytics => self.analytics,
            Feature::CustomBranding => self.custom_branding,
            Feature::AiInsights => self.ai_insights,
            Feature::BulkImport => self.bulk_import,
            Feature::Locations => self.locations,
            Feature::Templates => self.templates,
        }
    }

    /// Enabled capabilities, in table order.
    pub fn enabled(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::all().iter().copied().filter(|f| self.has(*f))
    }
}

/// Resolve the feature set for a tier.
///
/// Accepts a [`PlanTier`] or a raw tier string; unrecognised strings get the
/// free row.
#[must_use]
pub fn features_for(tier: impl Into<PlanTier>) -> FeatureSet {
    FeatureSet::for_tier(tier.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parsing() {
        assert_eq!("starter".parse::<PlanTier>(), Ok(PlanTier::Starter));
        assert!(" pro ".parse::<PlanTier>().is_err());
        assert_eq!(
            "enterprise".parse::<PlanTier>(),
            Err(UnknownTier("enterprise".to_string()))
        );

        assert_eq!(PlanTier::from_str_lossy("enterprise"), PlanTier::Free);
        assert_eq!(PlanTier::from_str_lossy("PRO"), PlanTier::Free);
        assert_eq!(PlanTier::from(None::<&str>), PlanTier::Free);
        assert_eq!(PlanTier::from(Some("pro")), PlanTier::Pro);
    }

    #[test]
    fn test_tier_deserializes_leniently() {
        #[derive(Deserialize)]
        struct Account {
            plan: PlanTier,
        }

        let tier: PlanTier = serde_json::from_str("\"starter\"").unwrap();
        assert_eq!(tier, PlanTier::Starter);

        for raw in ["\"enterprise\"", "\"Pro\"", "\"\""] {
            let tier: PlanTier = serde_json::from_str(raw).unwrap();
            assert_eq!(tier, PlanTier::Free, "{}", raw);
        }

        let account: Account = serde_json::from_str(r#"{"plan":"enterprise"}"#).unwrap();
        assert_eq!(account.plan, PlanTier::Free);

        // Output keeps the lowercase identifiers
        assert_eq!(serde_json::to_string(&PlanTier::Pro).unwrap(), "\"pro\"");
    }

    #[test]
    fn test_tier_ordering() {
        assert!(PlanTier::Pro.includes(PlanTier::Starter));
        assert!(PlanTier::Starter.includes(PlanTier::Starter));
        assert!(!PlanTier::Free.includes(PlanTier::Starter));
        assert_eq!(PlanTier::all().len(), 3);
    }

    #[test]
    fn test_limit_check() {
        let limit = Limit::Capped(3);
        assert_eq!(
            limit.check(2),
            LimitCheckResult::WithinLimit { current: 2, max: 3 }
        );
        assert!(limit.check(3).is_at_limit());
        assert!(limit.check(10).is_at_limit());
        assert_eq!(limit.check(10).remaining(), Some(0));
        assert_eq!(limit.check(1).remaining(), Some(2));

        assert_eq!(Limit::Unlimited.check(u64::MAX), LimitCheckResult::Unlimited);
        assert_eq!(Limit::Unlimited.check(5).remaining(), None);
    }

    #[test]
    fn test_limit_label() {
        assert_eq!(limit_label(Limit::Unlimited), "Unlimited");
        assert_eq!(limit_label(Limit::Capped(5)), "5");
        assert_eq!(limit_label(Limit::Capped(0)), "0");
    }

    #[test]
    fn test_feature_names() {
        for feature in Feature::all() {
            assert_eq!(Feature::from_name(feature.name()), Some(*feature));
        }
        assert_eq!(Feature::from_name("bulk_import"), Some(Feature::BulkImport));
        assert_eq!(Feature::from_name("teleport"), None);
    }

    #[test]
    fn test_enabled_features() {
        let free: Vec<_> = FeatureSet::for_tier(PlanTier::Free).enabled().collect();
        assert!(free.is_empty());

        let starter: Vec<_> = FeatureSet::for_tier(PlanTier::Starter).enabled().collect();
        assert_eq!(starter.len(), 6);
        assert!(!starter.contains(&Feature::AiInsights));

        let pro: Vec<_> = FeatureSet::for_tier(PlanTier::Pro).enabled().collect();
        assert_eq!(pro.len(), Feature::all().len());
    }

    #[test]
    fn test_feature_set_json() {
        let json = serde_json::to_value(features_for(PlanTier::Free)).unwrap();
        assert_eq!(json["maxMenus"], 1);
        assert_eq!(json["maxItems"], 3);
        assert_eq!(json["removeWatermark"], false);

        let json = serde_json::to_value(features_for(PlanTier::Pro)).unwrap();
        assert!(json["maxMenus"].is_null());
        assert_eq!(json["bulkImport"], true);

        let back: FeatureSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, features_for(PlanTier::Pro));
    }
}
