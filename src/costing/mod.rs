//! Costing a catalog product for a sales channel.
//!
//! This is the caller side of the pricing engine: it resolves a product's
//! bill of materials, production steps, the workshop's fixed costs and a
//! channel's fees into the per-unit [`PricingInput`] the solver expects.
//! Batch totals are divided by the order quantity here and nowhere else.

mod catalog;
mod channel;
mod fixed_costs;

pub use catalog::{BomLine, MaterialRole, MaterialTotals, ProcessStep, Product, StepTotals};
pub use channel::{FeeAmortization, SalesChannel};
pub use fixed_costs::{Equipment, FixedCostItem, FixedCostPool};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};
use crate::pricing::{
    CostBreakdown, PricingInput, batch_overhead, checked_div, checked_mul, non_negative, per_unit,
    solve_price,
};

/// Everything besides the product needed to price it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingContext {
    /// Wage paid for an hour of hands-on production.
    #[serde(default)]
    pub labor_rate_per_hour: Decimal,
    #[serde(default)]
    pub fixed_costs: FixedCostPool,
    pub channel: SalesChannel,
    /// Target net profit as a fraction of the sale price.
    pub desired_margin: Decimal,
    /// Units produced and sold in this order.
    pub quantity: u32,
    #[serde(default)]
    pub fee_amortization: FeeAmortization,
}

/// A priced product for one channel and order size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuote {
    pub product: String,
    pub channel: String,
    pub quantity: u32,
    pub input: PricingInput,
    pub breakdown: CostBreakdown,
    /// Suggested price times quantity, zero when the breakdown is invalid.
    pub order_total: Decimal,
}

/// Build the solver input for `product` sold through `channel`.
pub fn pricing_input(
    product: &Product,
    ctx: &CostingContext,
    channel: &SalesChannel,
) -> Result<PricingInput> {
    let quantity = ctx.quantity;
    if quantity == 0 {
        return Err(PricingError::invalid(
            "quantity",
            "order quantity must be at least 1",
        ));
    }
    let labor_rate = non_negative("labor_rate_per_hour", ctx.labor_rate_per_hour)?;

    let materials = product.material_totals(quantity)?;
    let steps = product.step_totals()?;

    let minutes_per_hour = dec!(60);
    let direct_labor_cost = checked_div(
        "labor_rate_per_hour",
        checked_mul("unit_minutes", steps.unit_minutes, labor_rate)?,
        minutes_per_hour,
    )?;
    let setup_labor = checked_div(
        "labor_rate_per_hour",
        checked_mul("setup_minutes", steps.setup_minutes, labor_rate)?,
        minutes_per_hour,
    )?;
    let setup_cost_allocated = per_unit(setup_labor, quantity)?;

    // batch_overhead is the whole batch; spread it over the units sold.
    let overhead_batch = batch_overhead(
        steps.setup_minutes,
        steps.unit_minutes,
        quantity,
        ctx.fixed_costs.fixed_cost_per_hour()?,
    )?;
    let overhead_cost = per_unit(overhead_batch, quantity)?;

    Ok(PricingInput {
        material_cost: materials.production,
        packaging_cost: materials.packaging,
        direct_labor_cost,
        setup_cost_allocated,
        overhead_cost,
        channel_fixed_fee: channel.fixed_fee_per_unit(quantity, ctx.fee_amortization)?,
        channel_percent_fee: channel.percent_fee()?,
        desired_margin: ctx.desired_margin,
    })
}

fn quote_for_channel(
    product: &Product,
    ctx: &CostingContext,
    channel: &SalesChannel,
) -> Result<ProductQuote> {
    let input = pricing_input(product, ctx, channel)?;
    let breakdown = solve_price(&input)?;

    let order_total = if breakdown.is_valid {
        checked_mul(
            "quantity",
            breakdown.suggested_price,
            Decimal::from(ctx.quantity),
        )?
    } else {
        Decimal::ZERO
    };

    tracing::debug!(
        product = %product.name,
        channel = %channel.name,
        quantity = ctx.quantity,
        valid = breakdown.is_valid,
        price = %breakdown.suggested_price,
        "Priced product"
    );

    Ok(ProductQuote {
        product: product.name.clone(),
        channel: channel.name.clone(),
        quantity: ctx.quantity,
        input,
        breakdown,
        order_total,
    })
}

/// Price `product` through the context's channel.
pub fn price_product(product: &Product, ctx: &CostingContext) -> Result<ProductQuote> {
    quote_for_channel(product, ctx, &ctx.channel)
}

/// Price the same product and order through each of `channels`, in order.
pub fn compare_channels(
    product: &Product,
    ctx: &CostingContext,
    channels: &[SalesChannel],
) -> Result<Vec<ProductQuote>> {
    channels
        .iter()
        .map(|channel| quote_for_channel(product, ctx, channel))
        .collect()
}
