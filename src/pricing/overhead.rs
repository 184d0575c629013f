//! Fixed-cost allocation by production time.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::validate::{checked_add, checked_div, checked_mul, non_negative};
use crate::error::{PricingError, Result};

const MINUTES_PER_HOUR: Decimal = dec!(60);

/// Overhead attributable to a whole batch.
///
/// Returns `((setup_minutes + unit_minutes * quantity) / 60) * fixed_cost_per_hour`,
/// the total for the batch, NOT per unit. Callers wanting the per-unit figure
/// must divide by the same `quantity` (see [`per_unit`]).
pub fn batch_overhead(
    setup_minutes: Decimal,
    unit_minutes: Decimal,
    quantity: u32,
    fixed_cost_per_hour: Decimal,
) -> Result<Decimal> {
    non_negative("setup_minutes", setup_minutes)?;
    non_negative("unit_minutes", unit_minutes)?;
    non_negative("fixed_cost_per_hour", fixed_cost_per_hour)?;
    if quantity == 0 {
        return Err(PricingError::invalid(
            "quantity",
            "batch quantity must be at least 1",
        ));
    }

    let running = checked_mul("unit_minutes", unit_minutes, Decimal::from(quantity))?;
    let total_minutes = checked_add("setup_minutes", setup_minutes, running)?;
    // Multiply before dividing so whole-hour batches stay exact.
    let cost_minutes = checked_mul("fixed_cost_per_hour", total_minutes, fixed_cost_per_hour)?;
    checked_div("fixed_cost_per_hour", cost_minutes, MINUTES_PER_HOUR)
}

/// Split a batch total across the units of that batch.
pub fn per_unit(batch_total: Decimal, quantity: u32) -> Result<Decimal> {
    if quantity == 0 {
        return Err(PricingError::invalid(
            "quantity",
            "batch quantity must be at least 1",
        ));
    }
    checked_div("quantity", batch_total, Decimal::from(quantity))
}
