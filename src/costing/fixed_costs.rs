//! Monthly fixed-cost pool reduced to an hourly rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};
use crate::pricing::{checked_add, checked_div, non_negative};

/// A recurring monthly cost (rent, utilities, software).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedCostItem {
    pub name: String,
    pub monthly_amount: Decimal,
}

/// A piece of equipment depreciated in a straight line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    pub purchase_price: Decimal,
    #[serde(default)]
    pub residual_value: Decimal,
    pub useful_life_months: u32,
}

impl Equipment {
    /// Depreciation charged each month over the useful life.
    pub fn monthly_depreciation(&self) -> Result<Decimal> {
        let price = non_negative("purchase_price", self.purchase_price)?;
        let residual = non_negative("residual_value", self.residual_value)?;
        if residual > price {
            return Err(PricingError::invalid(
                "residual_value",
                format!(
                    "{} exceeds purchase price {} of {}",
                    residual, price, self.name
                ),
            ));
        }
        if self.useful_life_months == 0 {
            return Err(PricingError::invalid(
                "useful_life_months",
                format!("{} must have a useful life of at least one month", self.name),
            ));
        }
        checked_div(
            "useful_life_months",
            price - residual,
            Decimal::from(self.useful_life_months),
        )
    }
}

/// Everything the workshop pays each month regardless of output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixedCostPool {
    #[serde(default)]
    pub items: Vec<FixedCostItem>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    /// Hours of production the workshop works in a month.
    #[serde(default)]
    pub productive_hours_per_month: Decimal,
}

impl FixedCostPool {
    /// Fixed costs plus depreciation for one month.
    pub fn monthly_total(&self) -> Result<Decimal> {
        let mut total = Decimal::ZERO;
        for item in &self.items {
            let amount = non_negative("monthly_amount", item.monthly_amount)?;
            total = checked_add("monthly_amount", total, amount)?;
        }
        for equipment in &self.equipment {
            total = checked_add("purchase_price", total, equipment.monthly_depreciation()?)?;
        }
        Ok(total)
    }

    /// Fixed cost carried by each productive hour.
    ///
    /// An empty pool costs nothing per hour even when no hours are recorded.
    pub fn fixed_cost_per_hour(&self) -> Result<Decimal> {
        let total = self.monthly_total()?;
        let hours = non_negative("productive_hours_per_month", self.productive_hours_per_month)?;
        if total.is_zero() {
            return Ok(Decimal::ZERO);
        }
        if hours.is_zero() {
            return Err(PricingError::invalid(
                "productive_hours_per_month",
                "must be greater than zero",
            ));
        }
        checked_div("productive_hours_per_month", total, hours)
    }
}
