//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::DateTime;

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    DateTime::parse_from_rfc3339(datetime_str)
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|_| datetime_str.to_string())
}

/// Format ISO datetime string to DD.MM.YYYY format
/// Example: "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(datetime_str: &str) -> String {
    DateTime::parse_from_rfc3339(datetime_str)
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| datetime_str.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
