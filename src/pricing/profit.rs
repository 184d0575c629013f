//! Profit at a hand-entered price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::breakdown::PricingInput;
use super::validate::{checked_add, checked_div, checked_mul, checked_sub, non_negative};
use crate::error::Result;

/// What a given price actually earns once fees and costs are paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitAnalysis {
    pub price: Decimal,
    /// Amount of the price kept by the channel's percentage fees.
    pub percent_fee_amount: Decimal,
    /// Variable costs, overhead and the per-unit fixed fee.
    pub total_cost: Decimal,
    pub net_profit: Decimal,
    /// Net profit as a fraction of the price.
    pub achieved_margin: Decimal,
}

impl ProfitAnalysis {
    /// Analyse `price` against the costs and fees in `input`.
    ///
    /// The input's desired margin is ignored; the achieved margin is the output.
    pub fn at_price(input: &PricingInput, price: Decimal) -> Result<Self> {
        non_negative("price", price)?;
        let percent_fee = non_negative("channel_percent_fee", input.channel_percent_fee)?;

        let mut total_cost = Decimal::ZERO;
        for (field, amount) in [
            ("material_cost", input.material_cost),
            ("packaging_cost", input.packaging_cost),
            ("direct_labor_cost", input.direct_labor_cost),
            ("setup_cost_allocated", input.setup_cost_allocated),
            ("overhead_cost", input.overhead_cost),
            ("channel_fixed_fee", input.channel_fixed_fee),
        ] {
            total_cost = checked_add(field, total_cost, non_negative(field, amount)?)?;
        }

        let percent_fee_amount = checked_mul("channel_percent_fee", price, percent_fee)?;
        let net_profit = checked_sub("price", price, percent_fee_amount)?;
        let net_profit = checked_sub("price", net_profit, total_cost)?;
        let achieved_margin = if price.is_zero() {
            Decimal::ZERO
        } else {
            checked_div("price", net_profit, price)?
        };

        Ok(Self {
            price,
            percent_fee_amount,
            total_cost,
            net_profit,
            achieved_margin,
        })
    }

    /// True when the price leaves something after fees and costs.
    pub fn is_profitable(&self) -> bool {
        self.net_profit > Decimal::ZERO
    }

    /// True when the achieved margin reaches `target`.
    pub fn meets_margin(&self, target: Decimal) -> bool {
        self.achieved_margin >= target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::solve_price;
    use rust_decimal_macros::dec;

    fn input() -> PricingInput {
        PricingInput {
            material_cost: dec!(6),
            packaging_cost: dec!(1),
            direct_labor_cost: dec!(2),
            setup_cost_allocated: dec!(1),
            overhead_cost: dec!(2),
            channel_fixed_fee: dec!(1),
            channel_percent_fee: dec!(0.18),
            desired_margin: dec!(0.20),
        }
    }

    #[test]
    fn test_profit_at_price() {
        let analysis = ProfitAnalysis::at_price(&input(), dec!(20)).unwrap();

        assert_eq!(analysis.percent_fee_amount, dec!(3.6));
        assert_eq!(analysis.total_cost, dec!(13));
        assert_eq!(analysis.net_profit, dec!(3.4));
        assert_eq!(analysis.achieved_margin, dec!(0.17));
        assert!(analysis.is_profitable());
        assert!(!analysis.meets_margin(dec!(0.20)));
    }

    #[test]
    fn test_solved_price_achieves_desired_margin() {
        let breakdown = solve_price(&input()).unwrap();
        let analysis = ProfitAnalysis::at_price(&input(), breakdown.suggested_price).unwrap();

        assert_eq!(analysis.achieved_margin.round_dp(10), dec!(0.20));
    }

    #[test]
    fn test_loss_making_price() {
        let analysis = ProfitAnalysis::at_price(&input(), dec!(10)).unwrap();
        assert!(!analysis.is_profitable());
        assert!(analysis.net_profit < Decimal::ZERO);
    }

    #[test]
    fn test_zero_price() {
        let analysis = ProfitAnalysis::at_price(&input(), Decimal::ZERO).unwrap();
        assert_eq!(analysis.achieved_margin, Decimal::ZERO);
        assert_eq!(analysis.net_profit, dec!(-13));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(ProfitAnalysis::at_price(&input(), dec!(-1)).is_err());
    }
}
