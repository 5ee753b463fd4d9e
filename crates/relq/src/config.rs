//! Sample configuration
//!
//! Runtime parameters of the sample queries: thresholds, price bands and the
//! contact-record patterns. Values come from [`Default`], JSON (serde), or
//! `RELQ_*` environment variables, and are checked by
//! [`SampleConfig::validate`] before any query runs.

use relq_core::{Error, Result};
use relq_model::ContactRules;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Parameters for the sample catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Customers whose order total sum exceeds this are reported by `task01`
    pub min_customer_total: Decimal,
    /// A single order above this marks a customer in `task03`
    pub large_order_total: Decimal,
    /// Products priced at or below this are "cheap"
    pub cheap_price_limit: Decimal,
    /// Products priced above this are "expensive"
    pub expensive_price_limit: Decimal,
    /// Well-formed postal codes
    pub postal_pattern: String,
    /// Well-formed phone prefix
    pub phone_pattern: String,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            min_customer_total: Decimal::from(500),
            large_order_total: Decimal::from(1000),
            cheap_price_limit: Decimal::from(20),
            expensive_price_limit: Decimal::from(50),
            postal_pattern: ContactRules::DEFAULT_POSTAL_PATTERN.to_string(),
            phone_pattern: ContactRules::DEFAULT_PHONE_PATTERN.to_string(),
        }
    }
}

impl SampleConfig {
    /// Prefix of the environment variables read by [`SampleConfig::from_env`].
    pub const ENV_PREFIX: &'static str = "RELQ_";

    /// Defaults, overridden by any `RELQ_*` variable that is set.
    ///
    /// Recognized: `RELQ_MIN_CUSTOMER_TOTAL`, `RELQ_LARGE_ORDER_TOTAL`,
    /// `RELQ_CHEAP_PRICE_LIMIT`, `RELQ_EXPENSIVE_PRICE_LIMIT`,
    /// `RELQ_POSTAL_PATTERN`, `RELQ_PHONE_PATTERN`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`SampleConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", Self::ENV_PREFIX, name));
        let mut config = Self::default();

        if let Some(v) = var("MIN_CUSTOMER_TOTAL") {
            config.min_customer_total = parse_decimal("MIN_CUSTOMER_TOTAL", &v)?;
        }
        if let Some(v) = var("LARGE_ORDER_TOTAL") {
            config.large_order_total = parse_decimal("LARGE_ORDER_TOTAL", &v)?;
        }
        if let Some(v) = var("CHEAP_PRICE_LIMIT") {
            config.cheap_price_limit = parse_decimal("CHEAP_PRICE_LIMIT", &v)?;
        }
        if let Some(v) = var("EXPENSIVE_PRICE_LIMIT") {
            config.expensive_price_limit = parse_decimal("EXPENSIVE_PRICE_LIMIT", &v)?;
        }
        if let Some(v) = var("POSTAL_PATTERN") {
            config.postal_pattern = v;
        }
        if let Some(v) = var("PHONE_PATTERN") {
            config.phone_pattern = v;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SampleConfig =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the `task01` threshold.
    pub fn with_min_customer_total(mut self, total: Decimal) -> Self {
        self.min_customer_total = total;
        self
    }

    /// Set the `task03` threshold.
    pub fn with_large_order_total(mut self, total: Decimal) -> Self {
        self.large_order_total = total;
        self
    }

    /// Set both price band limits.
    pub fn with_price_bands(mut self, cheap: Decimal, expensive: Decimal) -> Self {
        self.cheap_price_limit = cheap;
        self.expensive_price_limit = expensive;
        self
    }

    /// Set the contact-record patterns.
    pub fn with_patterns<S: Into<String>>(mut self, postal: S, phone: S) -> Self {
        self.postal_pattern = postal.into();
        self.phone_pattern = phone.into();
        self
    }

    /// Check the configuration.
    ///
    /// Thresholds must not be negative, the cheap limit must be below the
    /// expensive one, and both patterns must compile.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("min_customer_total", self.min_customer_total),
            ("large_order_total", self.large_order_total),
            ("cheap_price_limit", self.cheap_price_limit),
            ("expensive_price_limit", self.expensive_price_limit),
        ];
        if let Some((name, value)) = limits.iter().find(|(_, v)| v.is_sign_negative()) {
            return Err(Error::Config(format!("{} must not be negative, got {}", name, value)));
        }
        if self.cheap_price_limit >= self.expensive_price_limit {
            return Err(Error::Config(format!(
                "cheap_price_limit ({}) must be below expensive_price_limit ({})",
                self.cheap_price_limit, self.expensive_price_limit
            )));
        }
        self.contact_rules().map(|_| ())
    }

    /// Compile the contact-record rules.
    pub fn contact_rules(&self) -> Result<ContactRules> {
        ContactRules::new(&self.postal_pattern, &self.phone_pattern)
    }
}

fn parse_decimal(name: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|e| {
        Error::Config(format!(
            "{}{} is not a decimal ({:?}): {}",
            SampleConfig::ENV_PREFIX,
            name,
            value,
            e
        ))
    })
}
