//! Input checks shared by the engine operations.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::error::{PricingError, Result};

/// Reject negative amounts.
pub(crate) fn non_negative(field: &'static str, value: Decimal) -> Result<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PricingError::invalid(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(value)
}

/// Reject values outside `[0, 1)`.
pub(crate) fn fraction(field: &'static str, value: Decimal) -> Result<Decimal> {
    non_negative(field, value)?;
    if value >= Decimal::ONE {
        return Err(PricingError::invalid(
            field,
            format!("must be below 1 (100%), got {}", value),
        ));
    }
    Ok(value)
}

pub(crate) fn checked_mul(field: &'static str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| PricingError::invalid(field, "arithmetic overflow"))
}

pub(crate) fn checked_add(field: &'static str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b)
        .ok_or_else(|| PricingError::invalid(field, "arithmetic overflow"))
}

pub(crate) fn checked_sub(field: &'static str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b)
        .ok_or_else(|| PricingError::invalid(field, "arithmetic overflow"))
}

pub(crate) fn checked_div(field: &'static str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_div(b)
        .ok_or_else(|| PricingError::invalid(field, "division overflow or by zero"))
}

/// Convert a floating point reading into a `Decimal`.
///
/// This is the only place a NaN or infinity can enter the engine, so it is
/// rejected here instead of being carried into a breakdown.
pub fn decimal_from_f64(field: &'static str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(PricingError::invalid(
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| PricingError::invalid(field, format!("{} is out of range", value)))
}
