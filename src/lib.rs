//! Cost and price calculator for artisan workshops.
//!
//! [`pricing`] is the pure engine: material loss, overhead allocation and the
//! fee- and margin-aware price solver. [`costing`] resolves catalog data
//! (bills of materials, production steps, fixed costs, sales channels) into
//! engine inputs. [`quote`] and [`cli`] are the outer surface.

pub mod cli;
pub mod config;
pub mod costing;
pub mod error;
pub mod pricing;
pub mod quote;

pub use error::{PricingError, Result};
