//! menukit - plan entitlements and menu editing for a restaurant digital-menu SaaS
//!
//! The hosted backend owns persistence, authentication, and payments. This
//! crate holds the domain rules the dashboard applies in front of it.
//!
//! # Features
//!
//! - **Entitlements**: a fixed plan table (free, starter, pro) with feature
//!   flags and menu/item limits, and pure checks over it
//! - **Checkout**: mapping from plan tier to hosted checkout identifier
//! - **Plan sessions**: the user's tier, fetched once and refreshed on demand
//! - **Menus**: drag-and-drop item reordering and CSV bulk import
//!
//! # Quick Start
//!
//! ```rust
//! use menukit::billing::{can_create_menu, features_for, limit_label, PlanTier};
//!
//! let tier = PlanTier::from_str_lossy("free");
//! let features = features_for(tier);
//!
//! assert!(can_create_menu(tier, 0));
//! assert!(!can_create_menu(tier, 1));
//! assert_eq!(limit_label(features.max_items), "3");
//! ```

pub mod billing;
mod config;
mod error;
pub mod menu;
pub mod utils;

// Re-exports for public API
pub use billing::{Feature, FeatureSet, Limit, PlanSession, PlanSource, PlanTier};
pub use config::{Config, ConfigBuilder, LoggingConfig};
pub use error::{MenuKitError, Result};
pub use menu::{ImportReport, MenuItem};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging with sensible defaults
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "info", "debug", "menukit=debug")
/// - `MENUKIT_LOG_JSON`: Set to "true" for JSON formatted logs
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("MENUKIT_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Initialize tracing with a custom configuration
pub fn init_tracing_with_config(config: &Config) {
    let env_filter = EnvFilter::new(&config.logging.level);

    // Logs go to stderr so command output on stdout stays machine readable.
    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
