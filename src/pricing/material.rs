//! Material cost with production loss.

use rust_decimal::Decimal;

use super::validate::{checked_div, checked_mul, non_negative};
use crate::error::{PricingError, Result};

/// Real cost of consuming `quantity` of a material once yield loss is paid for.
///
/// `quantity` is already scaled by the number of units produced. The result is
/// `quantity * unit_cost / (1 - loss_fraction)`. A zero quantity costs nothing
/// whatever the loss, and a loss of 100% or more is rejected because no amount
/// of purchased material would ever deliver usable output.
pub fn unit_material_cost(
    quantity: Decimal,
    unit_cost: Decimal,
    loss_fraction: Decimal,
) -> Result<Decimal> {
    non_negative("quantity", quantity)?;
    non_negative("unit_cost", unit_cost)?;
    non_negative("loss_fraction", loss_fraction)?;

    if quantity.is_zero() {
        return Ok(Decimal::ZERO);
    }

    if loss_fraction >= Decimal::ONE {
        return Err(PricingError::invalid(
            "loss_fraction",
            format!(
                "loss of {} consumes all material, cost is unbounded",
                loss_fraction
            ),
        ));
    }

    let gross = checked_mul("quantity", quantity, unit_cost)?;
    checked_div("loss_fraction", gross, Decimal::ONE - loss_fraction)
}
