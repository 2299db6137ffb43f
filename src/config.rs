use serde::{Deserialize, Serialize};

use crate::billing::{CheckoutConfig, CheckoutTargets};
use crate::error::{MenuKitError, Result};
use crate::utils::get_env_with_prefix;

/// Main configuration for menukit
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: default_json(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    false
}

/// Builder for Config with environment variable support
#[must_use = "builder does nothing until you call build()"]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn with_json_logging(mut self, enabled: bool) -> Self {
        self.config.logging.json = enabled;
        self
    }

    pub fn with_checkout(mut self, checkout: CheckoutConfig) -> Self {
        self.config.checkout = checkout;
        self
    }

    pub fn with_checkout_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.checkout.base_url = base_url.into();
        self
    }

    pub fn with_checkout_targets(mut self, targets: CheckoutTargets) -> Self {
        self.config.checkout.targets = targets;
        self
    }

    /// Load configuration from environment variables with MENUKIT_ prefix
    pub fn from_env(mut self) -> Self {
        if let Some(level) = get_env_with_prefix("LOG_LEVEL") {
            self.config.logging.level = level;
        }
        if let Some(json) = get_env_with_prefix("LOG_JSON") {
            self.config.logging.json = json.parse().unwrap_or(false);
        }

        if let Some(base_url) = get_env_with_prefix("CHECKOUT_BASE_URL") {
            self.config.checkout.base_url = base_url;
        }
        if let Some(id) = get_env_with_prefix("STARTER_CHECKOUT_ID") {
            self.config.checkout.targets.starter = id;
        }
        if let Some(id) = get_env_with_prefix("PRO_CHECKOUT_ID") {
            self.config.checkout.targets.pro = id;
        }
        self
    }

    /// Build the configuration, validating all settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The log level is not one of trace, debug, info, warn, error
    /// - The checkout base URL is not an HTTPS URL
    /// - A checkout identifier is empty, not a plain path segment, or shared by starter and pro
    pub fn build(self) -> Result<Config> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.config.logging.level.to_lowercase().as_str()) {
            return Err(MenuKitError::invalid_config(format!(
                "Invalid log level: {}. Must be one of: {}",
                self.config.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        self.config.checkout.validate()?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
