//! Solver input and result records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// Per-unit figures the price solver works from.
///
/// Every amount is already per unit. In particular `channel_fixed_fee` has
/// been divided by the order quantity when the channel charges per order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingInput {
    pub material_cost: Decimal,
    pub packaging_cost: Decimal,
    pub direct_labor_cost: Decimal,
    pub setup_cost_allocated: Decimal,
    /// Allocated fixed cost per unit.
    pub overhead_cost: Decimal,
    pub channel_fixed_fee: Decimal,
    /// Fraction of the sale price kept by the channel.
    pub channel_percent_fee: Decimal,
    /// Target net profit as a fraction of the sale price.
    pub desired_margin: Decimal,
}

impl PricingInput {
    /// Same input with a different margin.
    pub fn with_margin(mut self, margin: Decimal) -> Self {
        self.desired_margin = margin;
        self
    }
}

/// Result of one price calculation.
///
/// Built fresh on every call. When `is_valid` is false the price is zero and
/// `error` says why; that is an expected outcome the caller shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material_cost: Decimal,
    pub packaging_cost: Decimal,
    pub direct_labor_cost: Decimal,
    pub setup_cost_allocated: Decimal,
    /// Sum of the four itemized costs above.
    pub variable_costs: Decimal,
    pub fixed_costs_allocated: Decimal,
    pub channel_fixed_fee: Decimal,
    pub channel_percent_fee: Decimal,
    pub desired_margin: Decimal,
    pub suggested_price: Decimal,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CostBreakdown {
    pub(crate) fn from_input(input: &PricingInput, variable_costs: Decimal) -> Self {
        Self {
            material_cost: input.material_cost,
            packaging_cost: input.packaging_cost,
            direct_labor_cost: input.direct_labor_cost,
            setup_cost_allocated: input.setup_cost_allocated,
            variable_costs,
            fixed_costs_allocated: input.overhead_cost,
            channel_fixed_fee: input.channel_fixed_fee,
            channel_percent_fee: input.channel_percent_fee,
            desired_margin: input.desired_margin,
            suggested_price: Decimal::ZERO,
            is_valid: false,
            error: None,
        }
    }

    pub(crate) fn solved(mut self, price: Decimal) -> Self {
        self.suggested_price = price;
        self.is_valid = true;
        self.error = None;
        self
    }

    pub(crate) fn rejected(mut self, reason: impl Into<String>) -> Self {
        self.suggested_price = Decimal::ZERO;
        self.is_valid = false;
        self.error = Some(reason.into());
        self
    }

    /// Everything the price has to cover before fees and profit.
    ///
    /// Saturates rather than panics on a hand-built breakdown.
    pub fn total_cost(&self) -> Decimal {
        self.variable_costs
            .saturating_add(self.fixed_costs_allocated)
            .saturating_add(self.channel_fixed_fee)
    }

    /// Amount of the price retained by the channel's percentage fees.
    pub fn percent_fee_amount(&self) -> Decimal {
        self.suggested_price.saturating_mul(self.channel_percent_fee)
    }

    /// Net profit left per unit at the suggested price.
    pub fn margin_amount(&self) -> Decimal {
        self.suggested_price.saturating_mul(self.desired_margin)
    }

    /// Turn an invalid breakdown into an error for callers that cannot
    /// display partial results.
    pub fn into_result(self) -> Result<Self> {
        if self.is_valid {
            Ok(self)
        } else {
            Err(PricingError::Unsolvable {
                reason: self
                    .error
                    .unwrap_or_else(|| "calculation is not valid".to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_accessors_saturate_on_deserialized_extremes() {
        let raw = serde_json::json!({
            "material_cost": Decimal::MAX,
            "packaging_cost": "0",
            "direct_labor_cost": "0",
            "setup_cost_allocated": "0",
            "variable_costs": Decimal::MAX,
            "fixed_costs_allocated": Decimal::MAX,
            "channel_fixed_fee": "1",
            "channel_percent_fee": "2",
            "desired_margin": "3",
            "suggested_price": Decimal::MAX,
            "is_valid": true
        });
        let breakdown: CostBreakdown = serde_json::from_value(raw).unwrap();

        assert_eq!(breakdown.total_cost(), Decimal::MAX);
        assert_eq!(breakdown.percent_fee_amount(), Decimal::MAX);
        assert_eq!(breakdown.margin_amount(), Decimal::MAX);
    }

    #[test]
    fn test_accessors_on_ordinary_values() {
        let input = PricingInput {
            material_cost: dec!(10),
            overhead_cost: dec!(2),
            channel_fixed_fee: dec!(1),
            channel_percent_fee: dec!(0.1),
            desired_margin: dec!(0.2),
            ..Default::default()
        };
        let breakdown = CostBreakdown::from_input(&input, dec!(10)).solved(dec!(50));

        assert_eq!(breakdown.total_cost(), dec!(13));
        assert_eq!(breakdown.percent_fee_amount(), dec!(5));
        assert_eq!(breakdown.margin_amount(), dec!(10));
    }
}
