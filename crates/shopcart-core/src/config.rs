//! # Promotion Configuration
//!
//! TOML representation of the discount table.
//!
//! ## Configuration Format
//! ```toml
//! # promotions.toml
//! [discount]
//! regular_percent = 0
//! second_percent = 50
//! sale_percent = 90
//! discount_percent = 10
//! discount_step_quantity = 10
//! discount_step_percent = 10
//! discount_type_cap = 50
//! bulk_step_quantity = 100
//! bulk_step_percent = 10
//! max_total_percent = 80
//! ```
//!
//! Any missing key falls back to [`DiscountRules::STANDARD`]; unknown keys
//! and tables are rejected so a misspelling cannot go unnoticed. This crate does
//! no file I/O: callers read the file and hand the contents to
//! [`PromotionConfig::from_toml_str`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::discount::DiscountRules;
use crate::error::{ConfigError, ConfigResult};

/// Promotion settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromotionConfig {
    /// Discount table.
    #[serde(default)]
    pub discount: DiscountRules,
}

impl PromotionConfig {
    /// Parses and validates a TOML document.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{ItemType, PromotionConfig};
    ///
    /// let config = PromotionConfig::from_toml_str("[discount]\nsecond_percent = 40\n").unwrap();
    /// assert_eq!(config.discount.discount(ItemType::Second, 1), 40);
    /// assert_eq!(config.discount.discount(ItemType::Sale, 1), 80);
    /// ```
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: PromotionConfig = toml::from_str(contents)?;
        config.validate()?;
        debug!(rules = ?config.discount, "Promotion config loaded");
        Ok(config)
    }

    /// Serializes to a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let rules = &self.discount;

        if rules.max_total_percent > 100 {
            return Err(ConfigError::Invalid(format!(
                "max_total_percent must be at most 100, got {}",
                rules.max_total_percent
            )));
        }

        if rules.discount_type_cap > 100 {
            return Err(ConfigError::Invalid(format!(
                "discount_type_cap must be at most 100, got {}",
                rules.discount_type_cap
            )));
        }

        Ok(())
    }
}
