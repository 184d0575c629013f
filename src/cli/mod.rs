//! Command-line interface.
//!
//! Each subcommand maps onto one engine or costing operation. Defaults come
//! from [`Settings`] and are passed into the engine explicitly.

pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::config::Settings;
use crate::pricing::{PricingInput, batch_overhead, per_unit, solve_price, unit_material_cost};
use crate::quote::QuoteRequest;

#[derive(Parser, Debug)]
#[command(name = "artisan-pricing", version, about = "Cost and price calculator for artisan products")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Real cost of material once production loss is paid for
    Material {
        /// Quantity consumed, already multiplied by units produced
        #[arg(long)]
        quantity: Decimal,

        /// Cost of one unit of material
        #[arg(long)]
        unit_cost: Decimal,

        /// Fraction of material lost in production (0.05 = 5%)
        #[arg(long, default_value = "0")]
        loss: Decimal,
    },

    /// Fixed costs attributed to a production batch
    Overhead {
        /// Setup minutes for the whole batch
        #[arg(long, default_value = "0")]
        setup_minutes: Decimal,

        /// Minutes of production per unit
        #[arg(long)]
        unit_minutes: Decimal,

        /// Units in the batch
        #[arg(long)]
        quantity: u32,

        /// Fixed cost per productive hour
        #[arg(long)]
        rate: Decimal,
    },

    /// Solve the unit price from per-unit costs, fees and margin
    Price {
        #[arg(long, default_value = "0")]
        material: Decimal,

        #[arg(long, default_value = "0")]
        packaging: Decimal,

        /// Direct labor per unit
        #[arg(long, default_value = "0")]
        labor: Decimal,

        /// Setup cost allocated to one unit
        #[arg(long, default_value = "0")]
        setup: Decimal,

        /// Overhead allocated to one unit
        #[arg(long, default_value = "0")]
        overhead: Decimal,

        /// Channel fixed fee, already per unit
        #[arg(long, default_value = "0")]
        fixed_fee: Decimal,

        /// Channel percentage fees as a fraction of price (0.18 = 18%)
        #[arg(long, default_value = "0")]
        percent_fee: Decimal,

        /// Desired margin as a fraction of price (defaults to ARTISAN_DEFAULT_MARGIN)
        #[arg(long)]
        margin: Option<Decimal>,
    },

    /// Price a product described in a JSON quote file
    Quote {
        /// Path to the quote request
        path: PathBuf,
    },
}

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every calculation produced a usable price.
    Priced,
    /// At least one breakdown could not be solved.
    Unsolvable,
}

/// Run a command, returning its printable output.
pub fn run_command(cmd: Command, settings: &Settings, json: bool) -> anyhow::Result<(String, Outcome)> {
    match cmd {
        Command::Material {
            quantity,
            unit_cost,
            loss,
        } => {
            let cost = unit_material_cost(quantity, unit_cost, loss)?;
            let out = if json {
                serde_json::json!({ "real_cost": cost }).to_string()
            } else {
                format!("Real material cost: {}", settings.round_price(cost))
            };
            Ok((out, Outcome::Priced))
        }

        Command::Overhead {
            setup_minutes,
            unit_minutes,
            quantity,
            rate,
        } => {
            let total = batch_overhead(setup_minutes, unit_minutes, quantity, rate)?;
            let unit = per_unit(total, quantity)?;
            let out = if json {
                serde_json::json!({ "batch_overhead": total, "per_unit_overhead": unit }).to_string()
            } else {
                format!(
                    "Batch overhead ({} units): {}\nPer-unit overhead: {}",
                    quantity,
                    settings.round_price(total),
                    settings.round_price(unit)
                )
            };
            Ok((out, Outcome::Priced))
        }

        Command::Price {
            material,
            packaging,
            labor,
            setup,
            overhead,
            fixed_fee,
            percent_fee,
            margin,
        } => {
            let input = PricingInput {
                material_cost: material,
                packaging_cost: packaging,
                direct_labor_cost: labor,
                setup_cost_allocated: setup,
                overhead_cost: overhead,
                channel_fixed_fee: fixed_fee,
                channel_percent_fee: percent_fee,
                desired_margin: margin.unwrap_or(settings.default_margin),
            };
            let breakdown = solve_price(&input)?;
            let outcome = if breakdown.is_valid {
                Outcome::Priced
            } else {
                Outcome::Unsolvable
            };
            let out = if json {
                serde_json::to_string_pretty(&breakdown)?
            } else {
                render::breakdown(settings, &breakdown)
            };
            Ok((out, outcome))
        }

        Command::Quote { path } => {
            let request = QuoteRequest::load(&path)?;
            let quotes = request.run(settings)?;
            let outcome = if quotes.iter().all(|q| q.breakdown.is_valid) {
                Outcome::Priced
            } else {
                Outcome::Unsolvable
            };
            let out = if json {
                serde_json::to_string_pretty(&quotes)?
            } else {
                quotes
                    .iter()
                    .map(|q| render::quote(settings, q))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            Ok((out, outcome))
        }
    }
}
