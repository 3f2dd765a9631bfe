//! Date/time matcher — strict parsing against an ordered list of formats
//!
//! Each accepted format is tried in order. A format whose *shape* matches
//! settles the outcome: either the calendar value resolves, or the input is
//! rejected as an impossible date without trying later formats. Day and
//! month overflow (31 April, 29 February in a common year) is never rolled
//! into the next period.

use chrono::format::ParseErrorKind;
use chrono::{Datelike, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ValidationError};

/// Rendering used for display, e.g. `Jan 12 2025 14:00`
pub const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

/// Rendering used for storage; itself an accepted input format
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One accepted input format
#[derive(Debug)]
pub struct AcceptedFormat {
    /// Human-readable pattern, e.g. `dd-MM-yyyy HHmm`
    pub pattern: &'static str,
    shape: Regex,
    chrono: &'static str,
}

impl AcceptedFormat {
    fn new(pattern: &'static str, shape: &str, chrono: &'static str) -> Self {
        AcceptedFormat {
            pattern,
            shape: Regex::new(shape).expect("date/time shape"),
            chrono,
        }
    }
}

/// Accepted formats in matching order; all fields zero-padded
pub static ACCEPTED_FORMATS: Lazy<Vec<AcceptedFormat>> = Lazy::new(|| {
    vec![
        AcceptedFormat::new("dd-MM-yyyy HHmm", r"^\d{2}-\d{2}-\d{4} \d{4}$", "%d-%m-%Y %H%M"),
        AcceptedFormat::new("yyyy-MM-dd HH:mm", r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$", "%Y-%m-%d %H:%M"),
        AcceptedFormat::new("yyyy-MM-dd HHmm", r"^\d{4}-\d{2}-\d{2} \d{4}$", "%Y-%m-%d %H%M"),
        AcceptedFormat::new("yyyy/MM/dd HH:mm", r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}$", "%Y/%m/%d %H:%M"),
        AcceptedFormat::new("yyyy/MM/dd HHmm", r"^\d{4}/\d{2}/\d{2} \d{4}$", "%Y/%m/%d %H%M"),
        AcceptedFormat::new("dd/MM/yyyy HH:mm", r"^\d{2}/\d{2}/\d{4} \d{2}:\d{2}$", "%d/%m/%Y %H:%M"),
        AcceptedFormat::new("dd/MM/yyyy HHmm", r"^\d{2}/\d{2}/\d{4} \d{4}$", "%d/%m/%Y %H%M"),
        AcceptedFormat::new("dd-MM-yyyy HH:mm", r"^\d{2}-\d{2}-\d{4} \d{2}:\d{2}$", "%d-%m-%Y %H:%M"),
    ]
});

/// Parse a date/time string against the accepted formats
///
/// # Errors
/// - `ImpossibleCalendarDate` if a format's shape matched but the value
///   does not exist (day 0, 31 April, hour 24, ...)
/// - `YearBelowMinimum` if the resolved year is below 1
/// - `UnrecognizedDateTimeFormat` if no format's shape matched
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime> {
    for format in ACCEPTED_FORMATS.iter() {
        if !format.shape.is_match(text) {
            continue;
        }

        match NaiveDateTime::parse_from_str(text, format.chrono) {
            Ok(parsed) if parsed.year() < 1 => {
                tracing::info!(input = text, "datetime year below minimum");
                return Err(ValidationError::YearBelowMinimum);
            }
            Ok(parsed) => return Ok(parsed),
            Err(e) if matches!(e.kind(), ParseErrorKind::OutOfRange | ParseErrorKind::Impossible) => {
                tracing::info!(input = text, format = format.pattern, "invalid datetime value");
                return Err(ValidationError::ImpossibleCalendarDate);
            }
            Err(_) => continue,
        }
    }

    tracing::info!(input = text, "invalid datetime format");
    Err(ValidationError::UnrecognizedDateTimeFormat)
}

/// Render for display, e.g. `Jan 12 2025 14:00`
pub fn format_date_time(date_time: &NaiveDateTime) -> String {
    date_time.format(DISPLAY_FORMAT).to_string()
}

/// Render in the storage form, `yyyy-MM-dd HH:mm`
pub fn canonical_date_time(date_time: &NaiveDateTime) -> String {
    date_time.format(CANONICAL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    // ── Accepted formats ───────────────────────────────

    #[test]
    fn test_all_accepted_formats() {
        let expected = at(2025, 1, 12, 14, 0);
        for input in [
            "12-01-2025 1400",
            "2025-01-12 14:00",
            "2025-01-12 1400",
            "2025/01/12 14:00",
            "2025/01/12 1400",
            "12/01/2025 14:00",
            "12/01/2025 1400",
            "12-01-2025 14:00",
        ] {
            assert_eq!(parse_date_time(input).unwrap(), expected, "input {}", input);
        }
    }

    #[test]
    fn test_format_order_matches_table() {
        let patterns: Vec<&str> = ACCEPTED_FORMATS.iter().map(|f| f.pattern).collect();
        assert_eq!(
            patterns,
            vec![
                "dd-MM-yyyy HHmm",
                "yyyy-MM-dd HH:mm",
                "yyyy-MM-dd HHmm",
                "yyyy/MM/dd HH:mm",
                "yyyy/MM/dd HHmm",
                "dd/MM/yyyy HH:mm",
                "dd/MM/yyyy HHmm",
                "dd-MM-yyyy HH:mm",
            ]
        );
    }

    #[test]
    fn test_leap_day() {
        let parsed = parse_date_time("29/02/2024 0930").unwrap();
        assert_eq!(parsed, at(2024, 2, 29, 9, 30));
        assert_eq!(parsed.minute(), 30);
    }

    // ── Impossible values ──────────────────────────────

    #[test]
    fn test_day_31_in_april() {
        assert_eq!(
            parse_date_time("31-04-2025 1000"),
            Err(ValidationError::ImpossibleCalendarDate)
        );
    }

    #[test]
    fn test_feb_29_common_year() {
        assert_eq!(
            parse_date_time("2025/02/29 10:00"),
            Err(ValidationError::ImpossibleCalendarDate)
        );
    }

    #[test]
    fn test_day_zero_and_month_thirteen() {
        assert_eq!(
            parse_date_time("00/01/2025 10:00"),
            Err(ValidationError::ImpossibleCalendarDate)
        );
        assert_eq!(
            parse_date_time("2025-13-01 1000"),
            Err(ValidationError::ImpossibleCalendarDate)
        );
    }

    #[test]
    fn test_hour_out_of_range() {
        assert_eq!(
            parse_date_time("12-01-2025 2400"),
            Err(ValidationError::ImpossibleCalendarDate)
        );
        assert_eq!(
            parse_date_time("12-01-2025 23:60"),
            Err(ValidationError::ImpossibleCalendarDate)
        );
    }

    #[test]
    fn test_year_zero() {
        assert_eq!(
            parse_date_time("0000-01-12 14:00"),
            Err(ValidationError::YearBelowMinimum)
        );
    }

    // ── Unrecognized shapes ────────────────────────────

    #[test]
    fn test_unrecognized_formats() {
        for input in [
            "",
            " ",
            "^",
            "peter*",
            "12-1-2025 1400",
            "12-01-25 1400",
            "12-01-2025 140",
            "12.01.2025 14:00",
            "2025-01-12T14:00",
            "12-01-2025  1400",
            "Jan 12 2025 14:00",
        ] {
            assert_eq!(
                parse_date_time(input),
                Err(ValidationError::UnrecognizedDateTimeFormat),
                "input {:?}",
                input
            );
        }
    }

    // ── Rendering ──────────────────────────────────────

    #[test]
    fn test_display_format() {
        let parsed = parse_date_time("12/01/2025 1400").unwrap();
        assert_eq!(format_date_time(&parsed), "Jan 12 2025 14:00");
    }

    #[test]
    fn test_canonical_form_reparses() {
        let parsed = parse_date_time("05-03-0999 0705").unwrap();
        let canonical = canonical_date_time(&parsed);
        assert_eq!(canonical, "0999-03-05 07:05");
        assert_eq!(parse_date_time(&canonical).unwrap(), parsed);
    }
}
