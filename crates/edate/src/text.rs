//! The canonical `YYYY-MM-DD` text form of a selected day.

use chrono::NaiveDate;

/// Failure to interpret a string as a canonical `YYYY-MM-DD` date.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseDateError {
    /// The text is not shaped like `YYYY-MM-DD` (four digits, dash, two digits, dash, two digits).
    #[error("expected a YYYY-MM-DD date, got {0:?}")]
    Malformed(String),

    /// The text is shaped correctly but names a day that does not exist on the calendar.
    #[error("no such calendar date: {0}")]
    OutOfRange(String),
}

/// Parse a date in the exact canonical `YYYY-MM-DD` form.
///
/// Zero-padded fields and ASCII hyphens only: no whitespace, no `2024-6-1`,
/// no alternative separators.
///
/// # Errors
/// [`ParseDateError::Malformed`] if the text is not shaped like `YYYY-MM-DD`,
/// [`ParseDateError::OutOfRange`] if it is but the day does not exist
/// (e.g. `2023-02-30`).
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseDateError> {
    let bytes = text.as_bytes();
    let canonical_shape = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .into_iter()
            .all(|i| bytes[i].is_ascii_digit());
    if !canonical_shape {
        return Err(ParseDateError::Malformed(text.to_owned()));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_err| ParseDateError::OutOfRange(text.to_owned()))
}

/// Format a date in the canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_text() {
        assert_eq!(
            parse_date("2024-03-15"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
        assert_eq!(
            parse_date("1999-12-31"),
            Ok(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap())
        );
        assert_eq!(
            parse_date("2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
    }

    #[test]
    fn rejects_malformed_text() {
        for text in [
            "",
            "2024-6-01",
            "2024-06-1",
            "24-06-01",
            "2024/06/01",
            " 2024-06-01",
            "2024-06-01 ",
            "2024-06-01x",
            "not a date",
        ] {
            assert_eq!(
                parse_date(text),
                Err(ParseDateError::Malformed(text.to_owned())),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn rejects_nonexistent_days() {
        for text in ["2023-02-29", "2024-02-30", "2024-04-31", "2024-13-01", "2024-00-10"] {
            assert_eq!(
                parse_date(text),
                Err(ParseDateError::OutOfRange(text.to_owned())),
                "{text:?} should not exist"
            );
        }
    }

    #[test]
    fn formats_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(format_date(date), "2024-06-01");
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(format_date(date), "1999-12-31");
    }

    #[test]
    fn round_trips() {
        for text in ["1900-01-01", "2000-02-29", "2024-03-15", "2100-12-31"] {
            let date = parse_date(text).unwrap();
            assert_eq!(format_date(date), text);
        }
    }
}
