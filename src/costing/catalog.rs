//! Product bill of materials and production steps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};
use crate::pricing::{checked_add, checked_div, checked_mul, non_negative, unit_material_cost};

/// What a material is used for in a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialRole {
    /// Goes into the product itself.
    #[default]
    Production,
    /// Wraps the product for sale or shipping.
    Packaging,
}

/// One material in a product's bill of materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    pub material: String,
    /// Cost of one purchase unit (gram, metre, sheet).
    pub unit_cost: Decimal,
    /// Purchase units consumed by one finished product.
    pub quantity_per_unit: Decimal,
    /// Expected fraction of purchased material lost in production.
    #[serde(default)]
    pub loss_fraction: Decimal,
    #[serde(default)]
    pub role: MaterialRole,
}

impl BomLine {
    /// Real cost of this line per finished unit in a batch of `units`.
    pub fn cost_per_unit(&self, units: u32) -> Result<Decimal> {
        if units == 0 {
            return Err(PricingError::invalid(
                "quantity",
                "batch quantity must be at least 1",
            ));
        }
        let units = Decimal::from(units);
        let quantity = checked_mul("quantity_per_unit", self.quantity_per_unit, units)?;
        let batch = unit_material_cost(quantity, self.unit_cost, self.loss_fraction)?;
        checked_div("quantity", batch, units)
    }
}

/// A production step, timed once per batch and once per unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub name: String,
    #[serde(default)]
    pub setup_minutes: Decimal,
    #[serde(default)]
    pub unit_minutes: Decimal,
}

/// A sellable product as the catalog describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub materials: Vec<BomLine>,
    #[serde(default)]
    pub steps: Vec<ProcessStep>,
}

/// Per-unit material costs split by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterialTotals {
    pub production: Decimal,
    pub packaging: Decimal,
}

/// Production minutes summed over all steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepTotals {
    pub setup_minutes: Decimal,
    pub unit_minutes: Decimal,
}

impl Product {
    /// Material and packaging cost per unit for a batch of `units`.
    pub fn material_totals(&self, units: u32) -> Result<MaterialTotals> {
        let mut totals = MaterialTotals::default();
        for line in &self.materials {
            let cost = line.cost_per_unit(units)?;
            match line.role {
                MaterialRole::Production => {
                    totals.production = checked_add("material_cost", totals.production, cost)?;
                }
                MaterialRole::Packaging => {
                    totals.packaging = checked_add("packaging_cost", totals.packaging, cost)?;
                }
            }
        }
        Ok(totals)
    }

    /// Setup and per-unit minutes across every step.
    pub fn step_totals(&self) -> Result<StepTotals> {
        let mut totals = StepTotals::default();
        for step in &self.steps {
            let setup = non_negative("setup_minutes", step.setup_minutes)?;
            let unit = non_negative("unit_minutes", step.unit_minutes)?;
            totals.setup_minutes = checked_add("setup_minutes", totals.setup_minutes, setup)?;
            totals.unit_minutes = checked_add("unit_minutes", totals.unit_minutes, unit)?;
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn candle() -> Product {
        Product {
            name: "soy candle".to_string(),
            materials: vec![
                BomLine {
                    material: "soy wax (g)".to_string(),
                    unit_cost: dec!(0.02),
                    quantity_per_unit: dec!(190),
                    loss_fraction: dec!(0.05),
                    role: MaterialRole::Production,
                },
                BomLine {
                    material: "wick".to_string(),
                    unit_cost: dec!(0.30),
                    quantity_per_unit: dec!(1),
                    loss_fraction: dec!(0),
                    role: MaterialRole::Production,
                },
                BomLine {
                    material: "gift box".to_string(),
                    unit_cost: dec!(1.50),
                    quantity_per_unit: dec!(1),
                    loss_fraction: dec!(0),
                    role: MaterialRole::Packaging,
                },
            ],
            steps: vec![
                ProcessStep {
                    name: "melt".to_string(),
                    setup_minutes: dec!(20),
                    unit_minutes: dec!(2),
                },
                ProcessStep {
                    name: "pour".to_string(),
                    setup_minutes: dec!(10),
                    unit_minutes: dec!(3),
                },
            ],
        }
    }

    #[test]
    fn test_line_cost_includes_loss() {
        let wax = &candle().materials[0];
        assert_eq!(wax.cost_per_unit(10).unwrap(), dec!(4));
    }

    #[test]
    fn test_material_totals_by_role() {
        let totals = candle().material_totals(10).unwrap();
        assert_eq!(totals.production, dec!(4.30));
        assert_eq!(totals.packaging, dec!(1.50));
    }

    #[test]
    fn test_step_totals() {
        let totals = candle().step_totals().unwrap();
        assert_eq!(totals.setup_minutes, dec!(30));
        assert_eq!(totals.unit_minutes, dec!(5));
    }

    #[test]
    fn test_total_loss_line_rejected() {
        let mut product = candle();
        product.materials[1].loss_fraction = dec!(1);
        assert!(product.material_totals(10).is_err());
    }

    #[test]
    fn test_empty_batch_rejected() {
        let err = candle().material_totals(0).unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidInput {
                field: "quantity",
                ..
            }
        ));
        assert!(candle().materials[0].cost_per_unit(0).is_err());
    }

    #[test]
    fn test_negative_step_rejected() {
        let mut product = candle();
        product.steps[0].unit_minutes = dec!(-1);
        assert!(product.step_totals().is_err());
    }
}
