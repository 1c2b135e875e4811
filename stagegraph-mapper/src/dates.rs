//! Date cell parsing.

use chrono::NaiveDate;

/// Formats seen in spreadsheet date columns, tried in order.
const FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%Y/%m/%d",
];

/// Parse a date cell into a calendar date, trying each known format.
///
/// Returns `None` for anything unparseable; the caller omits the triple
/// rather than failing the row.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_formats() {
        for text in ["2023-01-31", "01/31/2023", "31-Jan-2023", "January 31, 2023"] {
            assert_eq!(
                parse_date(text),
                NaiveDate::from_ymd_opt(2023, 1, 31),
                "failed on {text}"
            );
        }
    }

    #[test]
    fn two_digit_years_resolve() {
        assert!(parse_date("01/31/23").is_some());
    }

    #[test]
    fn garbage_is_none() {
        for text in ["TBD", "Q3", "", "2023-13-45", "next sprint"] {
            assert_eq!(parse_date(text), None, "accepted {text:?}");
        }
    }
}
