//! Pricing engine.
//!
//! Three pure operations, each usable on its own:
//! - [`unit_material_cost`]: material cost once production loss is paid for
//! - [`batch_overhead`]: fixed costs attributed to a batch by production time
//! - [`solve_price`]: the unit price that leaves the desired margin after
//!   percentage fees, fixed fees and costs
//!
//! Nothing here reads configuration or holds state. Identical inputs always
//! give identical breakdowns, so calls can run from any number of threads.

mod breakdown;
mod material;
mod overhead;
mod profit;
mod solver;
mod validate;

pub use breakdown::{CostBreakdown, PricingInput};
pub use material::unit_material_cost;
pub use overhead::{batch_overhead, per_unit};
pub use profit::ProfitAnalysis;
pub use solver::{FEES_EXCEED_PRICE, break_even_price, solve_price};
pub use validate::decimal_from_f64;

pub(crate) use validate::{checked_add, checked_div, checked_mul, fraction, non_negative};
