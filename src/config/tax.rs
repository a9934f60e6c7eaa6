use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

use crate::core::{AppError, Currency, Result};

/// Jurisdiction tax configuration
///
/// The standard VAT rate drives two things: the default `tax_rate` seeded
/// onto new lines, and the rate used for recoverable input VAT on purchase
/// documents (reverse-charge lines carry no supplier tax but are recovered
/// at the standard rate under self-assessment).
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    /// Standard VAT rate as a percentage (UAE: 5)
    pub standard_rate: Decimal,
    /// Base currency for documents that do not specify one
    pub base_currency: Currency,
}

impl TaxConfig {
    pub fn from_env() -> Result<Self> {
        Ok(TaxConfig {
            standard_rate: env::var("VAT_STANDARD_RATE")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid VAT_STANDARD_RATE".to_string()))?,
            base_currency: env::var("BASE_CURRENCY")
                .unwrap_or_else(|_| "AED".to_string())
                .parse()
                .map_err(|e: String| AppError::Configuration(e))?,
        })
    }

    /// Validate the configured rate is a usable percentage
    pub fn validate(&self) -> Result<()> {
        if self.standard_rate < Decimal::ZERO || self.standard_rate > Decimal::from(100) {
            return Err(AppError::Configuration(format!(
                "VAT standard rate must be between 0 and 100, got {}",
                self.standard_rate
            )));
        }

        Ok(())
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            standard_rate: Decimal::from(5),
            base_currency: Currency::AED,
        }
    }
}
