//! End-to-end quoting from a JSON request file.

use std::io::Write;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use artisan_pricing::PricingError;
use artisan_pricing::config::Settings;
use artisan_pricing::costing::FeeAmortization;
use artisan_pricing::quote::QuoteRequest;

const POTTERY_REQUEST: &str = r#"{
    "product": {
        "name": "mug",
        "materials": [
            { "material": "clay (kg)", "unit_cost": 4, "quantity_per_unit": 0.5, "loss_fraction": 0.2 },
            { "material": "box", "unit_cost": 0.5, "quantity_per_unit": 1, "role": "packaging" }
        ],
        "steps": [
            { "name": "throw", "setup_minutes": 30, "unit_minutes": 10 }
        ]
    },
    "channel": { "name": "marketplace", "fixed_fee_per_order": 5, "commission": 0.18 },
    "compare": [
        { "name": "craft fair", "commission": 0.05, "tax": 0.06 }
    ],
    "fixed_costs": {
        "items": [ { "name": "studio", "monthly_amount": 1500 } ],
        "productive_hours_per_month": 100
    },
    "labor_rate_per_hour": 12,
    "desired_margin": 0.2,
    "quantity": 5
}"#;

fn write_request(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn quote_file_prices_every_channel() {
    let file = write_request(POTTERY_REQUEST);
    let request = QuoteRequest::load(file.path()).unwrap();
    let quotes = request.run(&Settings::default()).unwrap();

    let channels: Vec<&str> = quotes.iter().map(|q| q.channel.as_str()).collect();
    assert_eq!(channels, vec!["marketplace", "craft fair"]);

    let marketplace = &quotes[0];
    assert!(marketplace.breakdown.is_valid);
    assert_eq!(marketplace.breakdown.variable_costs, dec!(6.2));
    assert_eq!(marketplace.breakdown.fixed_costs_allocated, dec!(4));
    assert_eq!(marketplace.breakdown.channel_fixed_fee, dec!(1));
    assert_eq!(
        marketplace.breakdown.suggested_price.round_dp(2),
        dec!(18.06)
    );

    let fair = &quotes[1];
    assert_eq!(fair.breakdown.channel_percent_fee, dec!(0.11));
    assert_eq!(fair.breakdown.channel_fixed_fee, Decimal::ZERO);
    // (6.2 + 4) / (1 - 0.11 - 0.2)
    assert_eq!(fair.breakdown.suggested_price, dec!(10.2) / dec!(0.69));
}

#[test]
fn fee_amortization_both_ways() {
    let file = write_request(POTTERY_REQUEST);
    let mut request = QuoteRequest::load(file.path()).unwrap();
    request.compare.clear();

    request.fee_amortization = Some(FeeAmortization::PerOrder);
    let per_order = request.run(&Settings::default()).unwrap().remove(0);
    request.fee_amortization = Some(FeeAmortization::PerUnit);
    let per_unit = request.run(&Settings::default()).unwrap().remove(0);

    assert_eq!(per_order.input.channel_fixed_fee, dec!(1));
    assert_eq!(per_unit.input.channel_fixed_fee, dec!(5));
    assert_eq!(per_order.breakdown.suggested_price, dec!(11.2) / dec!(0.62));
    assert_eq!(per_unit.breakdown.suggested_price, dec!(15.2) / dec!(0.62));
}

#[test]
fn unsolvable_request_is_reported_not_raised() {
    let file = write_request(POTTERY_REQUEST);
    let mut request = QuoteRequest::load(file.path()).unwrap();
    request.desired_margin = Some(dec!(0.9));

    let quotes = request.run(&Settings::default()).unwrap();
    for quote in &quotes {
        assert!(!quote.breakdown.is_valid);
        assert_eq!(quote.breakdown.suggested_price, Decimal::ZERO);
        assert_eq!(quote.order_total, Decimal::ZERO);
        assert_eq!(
            quote.breakdown.error.as_deref(),
            Some("fees + margin exceed 100% of price")
        );
    }
}

#[test]
fn malformed_file_is_json_error() {
    let file = write_request("{ \"product\": ");
    let err = QuoteRequest::load(file.path()).unwrap_err();
    assert!(matches!(err, PricingError::Json(_)));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuoteRequest::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PricingError::Io(_)));
}

#[test]
fn breakdown_serializes_for_display() {
    let file = write_request(POTTERY_REQUEST);
    let request = QuoteRequest::load(file.path()).unwrap();
    let quote = request.run(&Settings::default()).unwrap().remove(0);

    let value = serde_json::to_value(&quote.breakdown).unwrap();
    assert_eq!(value["is_valid"], serde_json::Value::Bool(true));
    assert!(value.get("error").is_none());
    let variable: Decimal = value["variable_costs"].as_str().unwrap().parse().unwrap();
    assert_eq!(variable, dec!(6.2));
}
