//! Temporal value codec.
//!
//! Dates at rest are always the canonical textual form `DD/MM/YYYY` or the
//! empty string. Editing layers work with `chrono::NaiveDate`; every
//! write-back to the document goes through `encode_date`. Calendar dates
//! only, no timezone component.

use chrono::NaiveDate;

/// Canonical textual date format stored in the document.
pub const CANONICAL_FORMAT: &str = "%d/%m/%Y";

/// Parses a canonical `DD/MM/YYYY` string.
///
/// Returns `None` for empty input, malformed input, and numerically
/// invalid calendar dates (month 13, 31st of February, ...).
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, CANONICAL_FORMAT).ok()
}

/// Parses a date the way the education step loads persisted values:
/// canonical `DD/MM/YYYY` when the text contains a slash, the
/// dash-separated ISO form `YYYY-MM-DD` when it contains a dash.
pub fn parse_date_loose(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.contains('/') {
        parse_date(text)
    } else if text.contains('-') {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
    } else {
        None
    }
}

/// Formats a date as canonical `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Write-back helper used by the step adapters: unset dates become the
/// empty string, everything else the canonical form.
pub fn encode_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_date() {
        let date = parse_date("25/12/2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 12, 25).unwrap());
    }

    #[test]
    fn test_format_then_parse_round_trips() {
        for text in ["01/01/2020", "29/02/2024", "31/12/1999", "05/07/2025"] {
            let parsed = parse_date(text).unwrap();
            assert_eq!(format_date(parsed), text);
        }
    }

    #[test]
    fn test_parse_rejects_empty_and_whitespace() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("12-25-2023"), None);
        assert_eq!(parse_date("25/12"), None);
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_dates() {
        assert_eq!(parse_date("01/13/2023"), None); // month 13
        assert_eq!(parse_date("31/02/2023"), None); // Feb 31st
        assert_eq!(parse_date("29/02/2023"), None); // not a leap year
        assert_eq!(parse_date("00/01/2023"), None);
    }

    #[test]
    fn test_loose_parse_accepts_iso_dashes() {
        let date = parse_date_loose("2023-12-25").unwrap();
        assert_eq!(format_date(date), "25/12/2023");
    }

    #[test]
    fn test_loose_parse_still_accepts_canonical() {
        assert_eq!(
            parse_date_loose("25/12/2023"),
            NaiveDate::from_ymd_opt(2023, 12, 25)
        );
    }

    #[test]
    fn test_loose_parse_rejects_other_shapes() {
        assert_eq!(parse_date_loose("25.12.2023"), None);
        assert_eq!(parse_date_loose(""), None);
        assert_eq!(parse_date_loose("2023-13-01"), None);
    }

    #[test]
    fn test_encode_date_empty_for_none() {
        assert_eq!(encode_date(None), "");
        assert_eq!(
            encode_date(NaiveDate::from_ymd_opt(2024, 2, 29)),
            "29/02/2024"
        );
    }
}
