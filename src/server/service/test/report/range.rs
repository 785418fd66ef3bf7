use super::*;

/// Tests that a range whose end lies before its start is refused.
#[test]
fn rejects_inverted_range() {
    let result = ReportRange::new(day("2025-06-04"), day("2025-06-01"));

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests that a single-day range is allowed.
#[test]
fn accepts_single_day_range() {
    let result = ReportRange::new(day("2025-06-01"), day("2025-06-01"));

    assert!(result.is_ok());
}
