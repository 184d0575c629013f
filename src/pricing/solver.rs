//! Fee- and margin-aware price solving.
//!
//! Channel percentage fees and the desired margin are both fractions of the
//! final price, so the price is solved from
//!
//! ```text
//! price = (CV + OH + TF) / (1 - T - L)
//! ```
//!
//! rather than marked up from cost.

use rust_decimal::Decimal;

use super::breakdown::{CostBreakdown, PricingInput};
use super::validate::{checked_add, checked_div, non_negative};
use crate::error::{PricingError, Result};

/// Message carried by a breakdown whose fees and margin leave no room for costs.
pub const FEES_EXCEED_PRICE: &str = "fees + margin exceed 100% of price";

/// Solve the recommended unit price for `input`.
///
/// Malformed inputs (negative amounts or fractions, overflow) are errors. An
/// input whose percent fee plus margin reaches 100% is not: it yields a
/// breakdown with `is_valid == false` so the user can lower one of them.
pub fn solve_price(input: &PricingInput) -> Result<CostBreakdown> {
    let material = non_negative("material_cost", input.material_cost)?;
    let packaging = non_negative("packaging_cost", input.packaging_cost)?;
    let labor = non_negative("direct_labor_cost", input.direct_labor_cost)?;
    let setup = non_negative("setup_cost_allocated", input.setup_cost_allocated)?;
    let overhead = non_negative("overhead_cost", input.overhead_cost)?;
    let fixed_fee = non_negative("channel_fixed_fee", input.channel_fixed_fee)?;
    let percent_fee = non_negative("channel_percent_fee", input.channel_percent_fee)?;
    let margin = non_negative("desired_margin", input.desired_margin)?;

    let variable = checked_add("material_cost", material, packaging)?;
    let variable = checked_add("direct_labor_cost", variable, labor)?;
    let variable = checked_add("setup_cost_allocated", variable, setup)?;

    let breakdown = CostBreakdown::from_input(input, variable);

    let numerator = checked_add("overhead_cost", variable, overhead)?;
    let numerator = checked_add("channel_fixed_fee", numerator, fixed_fee)?;
    let price_share = checked_add("desired_margin", percent_fee, margin)?;

    if price_share >= Decimal::ONE {
        tracing::warn!(
            percent_fee = %percent_fee,
            margin = %margin,
            "Price unsolvable: {}",
            FEES_EXCEED_PRICE
        );
        return Ok(breakdown.rejected(FEES_EXCEED_PRICE));
    }

    let denominator = Decimal::ONE - price_share;
    let price = checked_div("suggested_price", numerator, denominator)?;

    if price < numerator {
        return Err(PricingError::invalid(
            "suggested_price",
            format!("solved price {} does not cover costs {}", price, numerator),
        ));
    }

    tracing::debug!(
        variable_costs = %variable,
        overhead = %overhead,
        fixed_fee = %fixed_fee,
        denominator = %denominator,
        price = %price,
        "Solved unit price"
    );

    Ok(breakdown.solved(price))
}

/// Lowest price that covers every cost and fee with zero profit.
pub fn break_even_price(input: &PricingInput) -> Result<CostBreakdown> {
    solve_price(&input.with_margin(Decimal::ZERO))
}
