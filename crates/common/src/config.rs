//! Runtime settings for the business layer.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settings consumed by products and vendors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcmeConfig {
    /// Company named in the header of outgoing orders.
    pub company_name: String,
    /// Recipient of new-product announcements.
    pub sales_email: String,
    /// Instructions used when an order does not supply any.
    pub default_instructions: String,
    /// Markup percentage below which a suggested price carries a warning.
    pub recommended_markup: Decimal,
}

impl Default for AcmeConfig {
    fn default() -> Self {
        Self {
            company_name: "Acme, Inc".to_string(),
            sales_email: "sales@abc.com".to_string(),
            default_instructions: "standard delivery".to_string(),
            recommended_markup: Decimal::from(10),
        }
    }
}

impl AcmeConfig {
    /// Build a config from `ACME_*` environment variables, falling back to
    /// the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let recommended_markup = match lookup("ACME_RECOMMENDED_MARKUP") {
            Some(raw) => Decimal::from_str(raw.trim()).unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ACME_RECOMMENDED_MARKUP is not a decimal; using default");
                defaults.recommended_markup
            }),
            None => defaults.recommended_markup,
        };

        Self {
            company_name: lookup("ACME_COMPANY_NAME").unwrap_or(defaults.company_name),
            sales_email: lookup("ACME_SALES_EMAIL").unwrap_or(defaults.sales_email),
            default_instructions: lookup("ACME_DEFAULT_INSTRUCTIONS")
                .unwrap_or(defaults.default_instructions),
            recommended_markup,
        }
    }
}
