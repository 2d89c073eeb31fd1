//! Calendar date parsing and the wall clock.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound};
use regex::Regex;
use thiserror::Error;

/// Runs of separators accepted between date components.
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-/\\\s]+").unwrap());

/// Format every accepted date is normalized to.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A user-supplied date that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("could not parse {input:?}, expected a date like YYYY-MM-DD (e.g. 2024/01/07 is January 7th 2024)")]
pub struct DateParseError {
    /// The string as the user typed it.
    pub input: String,
}

/// Parses a `YYYY-MM-DD` date.
///
/// Components may be separated by `-`, `/`, `\` or whitespace; any run of
/// separators is treated as a single `-`.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let normalized = SEPARATOR_RE.replace_all(input.trim(), "-");
    NaiveDate::parse_from_str(&normalized, DATE_FORMAT).map_err(|_| DateParseError {
        input: input.to_string(),
    })
}

/// The current local wall-clock time at microsecond precision.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_all_separators() {
        for input in [
            "2024-01-07",
            "2024/01/07",
            "2024\\01\\07",
            "2024 01 07",
            "2024 / 01 / 07",
            "  2024-1-7  ",
        ] {
            assert_eq!(parse_date(input), Ok(ymd(2024, 1, 7)), "input {input:?}");
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "yesterday", "2024-13-01", "2024-02-30", "01/07/2024", "2024-01"] {
            let err = parse_date(input).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn error_names_the_input_and_expected_format() {
        let err = parse_date("2024.01.07").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"2024.01.07\""));
        assert!(message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn now_has_microsecond_precision() {
        assert_eq!(now().nanosecond() % 1_000, 0);
    }
}
