//! Checkout targets for plan upgrades.
//!
//! Upgrading happens on hosted checkout pages keyed by a plan identifier.
//! This module only maps tiers to those identifiers and builds the URL to
//! send the user to; creating and completing the checkout is up to the
//! billing provider.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{MenuKitError, Result};
use super::plans::PlanTier;

/// Checkout plan identifier for the starter tier.
pub const STARTER_CHECKOUT_ID: &str = "plan_starter_monthly";

/// Checkout plan identifier for the pro tier.
pub const PRO_CHECKOUT_ID: &str = "plan_PNrOKuTP2C51K";

/// Default hosted checkout location; plan identifiers are appended to it.
pub const DEFAULT_CHECKOUT_BASE_URL: &str = "https://checkout.menukit.app/plans/";

/// The checkout identifier for upgrading to `tier`.
///
/// There is no checkout for the free tier.
#[must_use]
pub fn checkout_target(tier: impl Into<PlanTier>) -> Option<&'static str> {
    match tier.into() {
        PlanTier::Free => None,
        PlanTier::Starter => Some(STARTER_CHECKOUT_ID),
        PlanTier::Pro => Some(PRO_CHECKOUT_ID),
    }
}

/// Configurable tier to checkout identifier mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTargets {
    pub starter: String,
    pub pro: String,
}

impl Default for CheckoutTargets {
    fn default() -> Self {
        Self {
            starter: STARTER_CHECKOUT_ID.to_string(),
            pro: PRO_CHECKOUT_ID.to_string(),
        }
    }
}

impl CheckoutTargets {
    #[must_use]
    pub fn target(&self, tier: impl Into<PlanTier>) -> Option<&str> {
        match tier.into() {
            PlanTier::Free => None,
            PlanTier::Starter => Some(self.starter.as_str()),
            PlanTier::Pro => Some(self.pro.as_str()),
        }
    }

    /// Find the tier a checkout identifier upgrades to.
    #[must_use]
    pub fn tier_for(&self, checkout_id: &str) -> Option<PlanTier> {
        PlanTier::all()
            .iter()
            .copied()
            .find(|tier| self.target(*tier) == Some(checkout_id))
    }

    /// Both identifiers must be plain path segments and distinct.
    pub fn validate(&self) -> Result<()> {
        validate_checkout_id(&self.starter)?;
        validate_checkout_id(&self.pro)?;
        if self.starter == self.pro {
            return Err(MenuKitError::invalid_config(format!(
                "Starter and pro share checkout identifier '{}'",
                self.starter
            )));
        }
        Ok(())
    }
}

/// Identifiers are appended to the base URL, so anything that would
/// resolve elsewhere (`/`, `?`, `#`, `:`, `..`) is refused.
fn validate_checkout_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(MenuKitError::invalid_config(
            "Checkout identifiers must not be empty",
        ));
    }
    let plain = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !plain {
        return Err(MenuKitError::invalid_config(format!(
            "Checkout identifier '{}' may only contain letters, digits, '_' and '-'",
            id
        )));
    }
    Ok(())
}

/// Where upgrade checkouts live and how they are keyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub targets: CheckoutTargets,
}

fn default_base_url() -> String {
    DEFAULT_CHECKOUT_BASE_URL.to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            targets: CheckoutTargets::default(),
        }
    }
}

impl CheckoutConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn targets(mut self, targets: CheckoutTargets) -> Self {
        self.targets = targets;
        self
    }

    /// Validate the base URL and identifier mapping.
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;
        self.targets.validate()
    }

    /// The hosted checkout URL for upgrading to `tier`, or `None` for free.
    pub fn checkout_url(&self, tier: impl Into<PlanTier>) -> Result<Option<Url>> {
        let Some(target) = self.targets.target(tier) else {
            return Ok(None);
        };

        validate_checkout_id(target)?;
        let base = self.parsed_base_url()?;
        let url = base.join(target).map_err(|e| {
            MenuKitError::invalid_config(format!("Invalid checkout identifier '{}': {}", target, e))
        })?;
        Ok(Some(url))
    }

    fn parsed_base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            MenuKitError::invalid_config(format!(
                "Invalid checkout base URL '{}': {}",
                self.base_url, e
            ))
        })?;

        let local = matches!(url.host_str(), Some("localhost") | Some("127.0.0.1"));
        match url.scheme() {
            "https" => {}
            "http" if local => {}
            _ => {
                return Err(MenuKitError::invalid_config(
                    "Checkout base URL must use HTTPS",
                ));
            }
        }

        // `join` replaces the last segment unless the path ends in a slash.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
