//! Date display helpers.

use chrono::NaiveDate;

const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Formats a date as `dd.mm.yyyy`, e.g. `17.05.2024`.
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses a `dd.mm.yyyy` date, the inverse of [`format_display`].
pub fn parse_display(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DISPLAY_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_with_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        assert_eq!(format_display(date), "17.05.2024");
    }

    #[test]
    fn test_parses_what_it_formats() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 1).unwrap();
        assert_eq!(parse_display(&format_display(date)).unwrap(), date);
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(parse_display("2024-05-17").is_err());
        assert!(parse_display("17/05/2024").is_err());
    }
}
