//! JSON quote requests.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::costing::{
    CostingContext, FeeAmortization, FixedCostPool, Product, ProductQuote, SalesChannel,
    compare_channels, price_product,
};
use crate::error::Result;

/// A product to price, as read from a quote file.
///
/// Optional fields fall back to [`Settings`]. When `compare` lists extra
/// channels the product is priced through `channel` and each of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub product: Product,
    pub channel: SalesChannel,
    #[serde(default)]
    pub compare: Vec<SalesChannel>,
    #[serde(default)]
    pub fixed_costs: FixedCostPool,
    #[serde(default)]
    pub labor_rate_per_hour: Option<Decimal>,
    #[serde(default)]
    pub desired_margin: Option<Decimal>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub fee_amortization: Option<FeeAmortization>,
}

fn default_quantity() -> u32 {
    1
}

impl QuoteRequest {
    /// Read a request from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let request = serde_json::from_str(&raw)?;
        tracing::debug!("Loaded quote request from {}", path.display());
        Ok(request)
    }

    /// Resolve the costing context, filling gaps from `settings`.
    pub fn context(&self, settings: &Settings) -> CostingContext {
        CostingContext {
            labor_rate_per_hour: self
                .labor_rate_per_hour
                .unwrap_or(settings.labor_rate_per_hour),
            fixed_costs: self.fixed_costs.clone(),
            channel: self.channel.clone(),
            desired_margin: self.desired_margin.unwrap_or(settings.default_margin),
            quantity: self.quantity,
            fee_amortization: self.fee_amortization.unwrap_or(settings.fee_amortization),
        }
    }

    /// Price the request through its channel and any compared channels.
    pub fn run(&self, settings: &Settings) -> Result<Vec<ProductQuote>> {
        let ctx = self.context(settings);
        if self.compare.is_empty() {
            return Ok(vec![price_product(&self.product, &ctx)?]);
        }

        let mut channels = Vec::with_capacity(self.compare.len() + 1);
        channels.push(self.channel.clone());
        channels.extend(self.compare.iter().cloned());
        compare_channels(&self.product, &ctx, &channels)
    }
}
