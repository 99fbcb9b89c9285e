use super::*;

#[test]
fn converts_zero_based_month() {
    let date = calendar_date(2026, 0, 31).unwrap();
    assert_eq!(date.month(), Month::January);
    assert_eq!(date.day(), 31);

    assert_eq!(calendar_date(2026, 11, 25).unwrap().month(), Month::December);
}

#[test]
fn rejects_impossible_dates() {
    assert!(calendar_date(2026, 1, 30).is_none());
    assert!(calendar_date(2026, 12, 1).is_none());
    assert!(calendar_date(2026, 0, 0).is_none());
}
