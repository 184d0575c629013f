//! Caller-side defaults loaded from the environment.
//!
//! The pricing engine never reads these; the CLI resolves them and passes
//! plain values in.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::costing::FeeAmortization;
use crate::error::{PricingError, Result};

const ENV_DEFAULT_MARGIN: &str = "ARTISAN_DEFAULT_MARGIN";
const ENV_FEE_AMORTIZATION: &str = "ARTISAN_FEE_AMORTIZATION";
const ENV_PRICE_DECIMALS: &str = "ARTISAN_PRICE_DECIMALS";
const ENV_LABOR_RATE: &str = "ARTISAN_LABOR_RATE";

/// Defaults applied when a request leaves a value out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Margin used when none is given.
    pub default_margin: Decimal,
    /// How channel fixed fees are spread over an order.
    pub fee_amortization: FeeAmortization,
    /// Decimal places prices are rounded to for display.
    pub price_decimals: u32,
    /// Hourly wage used when none is given.
    pub labor_rate_per_hour: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_margin: dec!(0.30),
            fee_amortization: FeeAmortization::PerOrder,
            price_decimals: 2,
            labor_rate_per_hour: Decimal::ZERO,
        }
    }
}

impl Settings {
    /// Load from `.env` (if present) and the process environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup(ENV_DEFAULT_MARGIN) {
            let margin = parse_decimal(ENV_DEFAULT_MARGIN, &value)?;
            if margin < Decimal::ZERO || margin >= Decimal::ONE {
                return Err(PricingError::Config {
                    reason: format!("{} must be in [0, 1), got {}", ENV_DEFAULT_MARGIN, value),
                });
            }
            settings.default_margin = margin;
        }

        if let Some(value) = lookup(ENV_FEE_AMORTIZATION) {
            settings.fee_amortization = value
                .parse()
                .map_err(|reason| PricingError::Config { reason })?;
        }

        if let Some(value) = lookup(ENV_PRICE_DECIMALS) {
            settings.price_decimals =
                value.trim().parse().map_err(|_| PricingError::Config {
                    reason: format!("{} must be a whole number, got '{}'", ENV_PRICE_DECIMALS, value),
                })?;
        }

        if let Some(value) = lookup(ENV_LABOR_RATE) {
            let rate = parse_decimal(ENV_LABOR_RATE, &value)?;
            if rate < Decimal::ZERO {
                return Err(PricingError::Config {
                    reason: format!("{} must not be negative, got {}", ENV_LABOR_RATE, value),
                });
            }
            settings.labor_rate_per_hour = rate;
        }

        Ok(settings)
    }

    /// Round a price for display, padding to the configured decimal places.
    pub fn round_price(&self, price: Decimal) -> Decimal {
        let mut rounded = price.round_dp_with_strategy(
            self.price_decimals,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        );
        rounded.rescale(self.price_decimals);
        rounded
    }
}

fn parse_decimal(key: &str, value: &str) -> Result<Decimal> {
    value.trim().parse().map_err(|_| PricingError::Config {
        reason: format!("{} must be a decimal number, got '{}'", key, value),
    })
}
