use super::*;

/// Tests parsing a display date with weekday prefix.
#[test]
fn parses_date_with_weekday_prefix() {
    assert_eq!(parse_display("Mo, 02.06.2025").unwrap(), day("2025-06-02"));
}

/// Tests parsing a bare date without prefix.
#[test]
fn parses_date_without_prefix() {
    assert_eq!(parse_display("02.06.2025").unwrap(), day("2025-06-02"));
}

/// Tests that unpadded day and month still parse.
#[test]
fn parses_unpadded_date() {
    assert_eq!(parse_display("2.6.2025").unwrap(), day("2025-06-02"));
}

/// Tests that the weekday prefix is dropped before the remainder is parsed,
/// also when the remainder is unpadded.
#[test]
fn strips_prefix_before_parsing() {
    assert_eq!(parse_display("Di, 3.6.2025").unwrap(), day("2025-06-03"));
    assert_eq!(parse_display("So, 01.06.2025").unwrap(), day("2025-06-01"));
}

/// Tests that nonsense input is refused.
#[test]
fn rejects_invalid_input() {
    assert!(parse_display("").is_err());
    assert!(parse_display("morgen").is_err());
    assert!(parse_display("2025-06-02").is_err());
    assert!(parse_display("31.02.2025").is_err());
}

/// Tests the round-trip identity: format, parse, format again yields the
/// same string for valid dates.
#[test]
fn format_parse_format_is_identity() {
    for value in ["2025-06-02", "2024-02-29", "2025-12-31", "2025-01-01"] {
        let formatted = format_display(day(value));
        let reparsed = parse_display(&formatted).unwrap();
        assert_eq!(format_display(reparsed), formatted);
    }
}
