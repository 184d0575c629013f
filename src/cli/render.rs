//! Plain-text rendering of engine results.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::costing::ProductQuote;
use crate::pricing::CostBreakdown;

fn percent(fraction: Decimal) -> String {
    match fraction.checked_mul(Decimal::ONE_HUNDRED) {
        Some(scaled) => format!("{}%", scaled.round_dp(2).normalize()),
        // Too large to scale; show the raw fraction instead.
        None => fraction.normalize().to_string(),
    }
}

/// Render a breakdown as an aligned table, or an error banner when invalid.
pub fn breakdown(settings: &Settings, breakdown: &CostBreakdown) -> String {
    let money = |value: Decimal| settings.round_price(value).to_string();
    let rows = [
        ("Material", money(breakdown.material_cost)),
        ("Packaging", money(breakdown.packaging_cost)),
        ("Direct labor", money(breakdown.direct_labor_cost)),
        ("Setup (allocated)", money(breakdown.setup_cost_allocated)),
        ("Variable costs", money(breakdown.variable_costs)),
        ("Overhead", money(breakdown.fixed_costs_allocated)),
        ("Channel fixed fee", money(breakdown.channel_fixed_fee)),
        ("Channel fees", percent(breakdown.channel_percent_fee)),
        ("Desired margin", percent(breakdown.desired_margin)),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<20} {:>12}", label, value);
    }

    if breakdown.is_valid {
        let _ = writeln!(
            out,
            "  {:<20} {:>12}",
            "Suggested price",
            money(breakdown.suggested_price)
        );
        let _ = writeln!(
            out,
            "  {:<20} {:>12}",
            "  of which fees",
            money(breakdown.percent_fee_amount())
        );
        let _ = writeln!(
            out,
            "  {:<20} {:>12}",
            "  of which profit",
            money(breakdown.margin_amount())
        );
    } else {
        let _ = writeln!(
            out,
            "  ERROR: {}",
            breakdown.error.as_deref().unwrap_or("calculation is not valid")
        );
    }
    out
}

/// Render a quote with its header and order total.
pub fn quote(settings: &Settings, quote: &ProductQuote) -> String {
    let mut out = format!(
        "{} via {} (x{})\n",
        quote.product, quote.channel, quote.quantity
    );
    out.push_str(&breakdown(settings, &quote.breakdown));
    if quote.breakdown.is_valid {
        let _ = writeln!(
            out,
            "  {:<20} {:>12}",
            "Order total",
            settings.round_price(quote.order_total)
        );
    }
    out
}
