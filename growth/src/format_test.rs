use super::*;

#[test]
fn grouped_inserts_thousands_separators() {
    assert_eq!(grouped(0), "0");
    assert_eq!(grouped(999), "999");
    assert_eq!(grouped(1_500), "1,500");
    assert_eq!(grouped(50_000), "50,000");
    assert_eq!(grouped(1_234_567), "1,234,567");
}

#[test]
fn dollars_prefixes_currency_symbol() {
    assert_eq!(dollars(2_000), "$2,000");
    assert_eq!(dollars(36_000), "$36,000");
    assert_eq!(dollars(-1_200), "$-1,200");
}

#[test]
fn thousands_k_uses_one_decimal() {
    assert_eq!(thousands_k(2_500), "$2.5k");
    assert_eq!(thousands_k(5_000), "$5.0k");
    assert_eq!(thousands_k(0), "$0.0k");
    assert_eq!(thousands_k(123_456), "$123.5k");
}

#[test]
fn thousands_k_rounds_ties_up() {
    assert_eq!(thousands_k(2_250), "$2.3k");
    assert_eq!(thousands_k(2_249), "$2.2k");
}

#[test]
fn percent_1_rounds_to_one_decimal() {
    assert_eq!(percent_1(2.0), "2.0%");
    assert_eq!(percent_1(2.5), "2.5%");
    assert_eq!(percent_1(3.125), "3.1%");
    assert_eq!(percent_1(0.25), "0.3%");
}

#[test]
fn percent_short_drops_trailing_zero() {
    assert_eq!(percent_short(2.0), "2%");
    assert_eq!(percent_short(2.5), "2.5%");
    assert_eq!(percent_short(20.0), "20%");
}
