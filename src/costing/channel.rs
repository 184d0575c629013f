//! Sales channels and how their fixed fee is spread.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};
use crate::pricing::{checked_add, checked_div, fraction, non_negative};

/// A sales outlet with its fee schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesChannel {
    pub name: String,
    /// Flat fee charged per order.
    #[serde(default)]
    pub fixed_fee_per_order: Decimal,
    /// Commission as a fraction of the sale price.
    #[serde(default)]
    pub commission: Decimal,
    /// Optional advertising levy as a fraction of the sale price.
    #[serde(default)]
    pub advertising: Option<Decimal>,
    /// Tax modeled as a fraction of the sale price.
    #[serde(default)]
    pub tax: Option<Decimal>,
}

impl SalesChannel {
    /// Direct sale: no fees at all.
    pub fn direct(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_fee_per_order: Decimal::ZERO,
            commission: Decimal::ZERO,
            advertising: None,
            tax: None,
        }
    }

    /// Combined percentage deducted from the sale price.
    pub fn percent_fee(&self) -> Result<Decimal> {
        let commission = fraction("commission", self.commission)?;
        let advertising = fraction("advertising", self.advertising.unwrap_or_default())?;
        let tax = fraction("tax", self.tax.unwrap_or_default())?;
        checked_add("tax", checked_add("advertising", commission, advertising)?, tax)
    }

    /// Fixed fee attributable to one unit of an order of `quantity` units.
    pub fn fixed_fee_per_unit(&self, quantity: u32, policy: FeeAmortization) -> Result<Decimal> {
        let fee = non_negative("fixed_fee_per_order", self.fixed_fee_per_order)?;
        match policy {
            FeeAmortization::PerUnit => Ok(fee),
            FeeAmortization::PerOrder => {
                if quantity == 0 {
                    return Err(PricingError::invalid(
                        "quantity",
                        "order quantity must be at least 1",
                    ));
                }
                checked_div("quantity", fee, Decimal::from(quantity))
            }
        }
    }
}

/// When a channel's fixed fee is charged.
///
/// ```text
/// PerOrder  fee / quantity on each unit (one charge per order)
/// PerUnit   fee on each unit
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeAmortization {
    #[default]
    PerOrder,
    PerUnit,
}

impl std::str::FromStr for FeeAmortization {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "per_order" | "perorder" | "order" => Ok(FeeAmortization::PerOrder),
            "per_unit" | "perunit" | "unit" => Ok(FeeAmortization::PerUnit),
            _ => Err(format!(
                "invalid fee amortization '{}', expected 'per_order' or 'per_unit'",
                s
            )),
        }
    }
}

impl std::fmt::Display for FeeAmortization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeAmortization::PerOrder => write!(f, "per_order"),
            FeeAmortization::PerUnit => write!(f, "per_unit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn marketplace() -> SalesChannel {
        SalesChannel {
            name: "marketplace".to_string(),
            fixed_fee_per_order: dec!(5),
            commission: dec!(0.12),
            advertising: Some(dec!(0.04)),
            tax: Some(dec!(0.02)),
        }
    }

    #[test]
    fn test_percent_fee_combines_components() {
        assert_eq!(marketplace().percent_fee().unwrap(), dec!(0.18));
        assert_eq!(SalesChannel::direct("fair").percent_fee().unwrap(), dec!(0));
    }

    #[test]
    fn test_component_out_of_range() {
        let mut channel = marketplace();
        channel.commission = dec!(1);
        assert!(channel.percent_fee().is_err());
    }

    #[test]
    fn test_fixed_fee_per_order_is_spread() {
        let fee = marketplace()
            .fixed_fee_per_unit(4, FeeAmortization::PerOrder)
            .unwrap();
        assert_eq!(fee, dec!(1.25));
    }

    #[test]
    fn test_fixed_fee_per_unit_is_not_spread() {
        let fee = marketplace()
            .fixed_fee_per_unit(4, FeeAmortization::PerUnit)
            .unwrap();
        assert_eq!(fee, dec!(5));
    }

    #[test]
    fn test_empty_order_rejected() {
        assert!(
            marketplace()
                .fixed_fee_per_unit(0, FeeAmortization::PerOrder)
                .is_err()
        );
    }

    #[test]
    fn test_amortization_parsing() {
        assert_eq!(
            "per_order".parse::<FeeAmortization>().unwrap(),
            FeeAmortization::PerOrder
        );
        assert_eq!(
            "PER_UNIT".parse::<FeeAmortization>().unwrap(),
            FeeAmortization::PerUnit
        );
        assert!("per_batch".parse::<FeeAmortization>().is_err());
        assert_eq!(FeeAmortization::PerUnit.to_string(), "per_unit");
    }
}
