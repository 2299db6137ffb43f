use crate::billing::PlanTier;

/// The main error type for menukit
#[derive(Debug, thiserror::Error)]
pub enum MenuKitError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Feature '{feature}' is not included in the {tier} plan")]
    FeatureNotIncluded { feature: String, tier: PlanTier },

    #[error("{resource} limit reached ({current} of {max}) on the {tier} plan")]
    LimitReached {
        resource: &'static str,
        current: u64,
        max: u64,
        tier: PlanTier,
    },

    #[error("Cannot move item from {from} to {to}: menu has {len} items")]
    InvalidReorder { from: usize, to: usize, len: usize },

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Plan source error: {0}")]
    PlanSource(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl MenuKitError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    pub fn plan_source(msg: impl Into<String>) -> Self {
        Self::PlanSource(msg.into())
    }

    /// Whether the error means "upgrade to proceed" rather than a fault.
    #[must_use]
    pub fn is_upgrade_required(&self) -> bool {
        matches!(
            self,
            Self::FeatureNotIncluded { .. } | Self::LimitReached { .. }
        )
    }
}

/// Result type alias for menukit operations
pub type Result<T> = std::result::Result<T, MenuKitError>;
