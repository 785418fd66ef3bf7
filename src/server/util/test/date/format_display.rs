use super::*;

/// Tests the German weekday abbreviations across a full week.
#[test]
fn maps_all_weekdays_to_german_abbreviations() {
    // 2025-06-02 is a Monday.
    let expected = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];
    for (offset, abbrev) in expected.iter().enumerate() {
        let date = day("2025-06-02") + chrono::Days::new(offset as u64);
        assert_eq!(weekday_abbrev(date), *abbrev);
    }
}

/// Tests the full display form, including zero padding.
#[test]
fn formats_weekday_prefix_and_padded_date() {
    assert_eq!(format_display(day("2025-06-02")), "Mo, 02.06.2025");
    assert_eq!(format_display(day("2025-12-31")), "Mi, 31.12.2025");
    assert_eq!(format_display(day("2025-01-05")), "So, 05.01.2025");
}
