#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_dashboard_start_state() {
    let m = InputMetrics::default();
    assert_eq!(m.monthly_traffic, 1000);
    assert_eq!(m.conversion_rate_pct, 2.0);
    assert_eq!(m.lead_to_sale_rate_pct, 20.0);
    assert_eq!(m.avg_deal_value, 500);
}

#[test]
fn slider_specs_cover_expected_ranges() {
    let traffic = MetricField::Traffic.spec();
    assert_eq!((traffic.min, traffic.max, traffic.step), (100.0, 50_000.0, 100.0));
    let conv = MetricField::ConversionRate.spec();
    assert_eq!((conv.min, conv.max, conv.step), (0.1, 10.0, 0.1));
    let close = MetricField::LeadToSaleRate.spec();
    assert_eq!((close.min, close.max, close.step), (1.0, 50.0, 1.0));
    let deal = MetricField::DealValue.spec();
    assert_eq!((deal.min, deal.max, deal.step), (50.0, 5_000.0, 50.0));
}

#[test]
fn set_from_slider_parses_and_stores() {
    let mut m = InputMetrics::default();
    m.set_from_slider(MetricField::Traffic, "2500").unwrap();
    m.set_from_slider(MetricField::ConversionRate, "3.4").unwrap();
    m.set_from_slider(MetricField::LeadToSaleRate, "35").unwrap();
    m.set_from_slider(MetricField::DealValue, "1200").unwrap();
    assert_eq!(m.monthly_traffic, 2500);
    assert_eq!(m.conversion_rate_pct, 3.4);
    assert_eq!(m.lead_to_sale_rate_pct, 35.0);
    assert_eq!(m.avg_deal_value, 1200);
}

#[test]
fn set_from_slider_truncates_integer_fields() {
    let mut m = InputMetrics::default();
    m.set_from_slider(MetricField::DealValue, "749.9").unwrap();
    assert_eq!(m.avg_deal_value, 749);
}

#[test]
fn set_from_slider_clamps_out_of_range_values() {
    let mut m = InputMetrics::default();
    m.set_from_slider(MetricField::Traffic, "1000000").unwrap();
    m.set_from_slider(MetricField::ConversionRate, "-4").unwrap();
    m.set_from_slider(MetricField::LeadToSaleRate, "0").unwrap();
    m.set_from_slider(MetricField::DealValue, "10").unwrap();
    assert_eq!(m.monthly_traffic, 50_000);
    assert_eq!(m.conversion_rate_pct, 0.1);
    assert_eq!(m.lead_to_sale_rate_pct, 1.0);
    assert_eq!(m.avg_deal_value, 50);
}

#[test]
fn set_from_slider_rejects_garbage_and_keeps_state() {
    let mut m = InputMetrics::default();
    let err = m.set_from_slider(MetricField::ConversionRate, "abc").unwrap_err();
    assert_eq!(err, InputError::Unparseable { field: "Traffic-to-Lead %", raw: "abc".to_owned() });
    assert!(m.set_from_slider(MetricField::Traffic, "NaN").is_err());
    assert_eq!(m, InputMetrics::default());
}

#[test]
fn clamped_constructor_applies_every_range() {
    let m = InputMetrics::clamped(20.0, 50.0, 99.0, 9_999.0);
    assert_eq!(m.monthly_traffic, 100);
    assert_eq!(m.conversion_rate_pct, 10.0);
    assert_eq!(m.lead_to_sale_rate_pct, 50.0);
    assert_eq!(m.avg_deal_value, 5_000);
}

#[test]
fn display_formats_each_readout() {
    let m = InputMetrics { monthly_traffic: 12_300, conversion_rate_pct: 2.5, lead_to_sale_rate_pct: 20.0, avg_deal_value: 750 };
    assert_eq!(MetricField::Traffic.display(&m), "12,300");
    assert_eq!(MetricField::ConversionRate.display(&m), "2.5%");
    assert_eq!(MetricField::LeadToSaleRate.display(&m), "20%");
    assert_eq!(MetricField::DealValue.display(&m), "$750");
}

#[test]
fn value_reads_back_current_field() {
    let m = InputMetrics::default();
    let values: Vec<f64> = MetricField::ALL.iter().map(|f| f.value(&m)).collect();
    assert_eq!(values, vec![1000.0, 2.0, 20.0, 500.0]);
}
