//! Date/time conversion between a readable timestamp, UTC and Unix seconds.
//!
//! Text input accepts:
//!
//! - RFC 3339 (`2024-01-15T10:30:00Z`, `2024-01-15T12:30:00+02:00`)
//! - RFC 2822 (`Mon, 15 Jan 2024 10:30:00 +0000`)
//! - `YYYY-MM-DD HH:MM[:SS]` or with a `T`, read as wall-clock time in the
//!   target timezone
//! - `M/D/YYYY[ HH:MM[:SS]]`, also wall-clock time
//! - `YYYY-MM-DD` alone, read as midnight UTC
//!
//! ```rust
//! use chrono::Utc;
//! use convkit::datetime::{self, DateTimeInput};
//!
//! let out = datetime::convert_in(&DateTimeInput::unix("1705314600"), &Utc).unwrap();
//! assert_eq!(out.utc, "Mon, 15 Jan 2024 10:30:00 GMT");
//! assert_eq!(out.local, "1/15/2024, 10:30:00 AM");
//! assert_eq!(out.unix, 1705314600);
//! ```

use crate::{Error, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;

const WALL_CLOCK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const UTC_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const LOCAL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Which field the instant came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateTimeInput {
    /// A readable date/time string.
    Text(String),
    /// Whole seconds since the Unix epoch.
    Unix(String),
}

impl DateTimeInput {
    pub fn text(s: impl Into<String>) -> Self {
        DateTimeInput::Text(s.into())
    }

    pub fn unix(s: impl Into<String>) -> Self {
        DateTimeInput::Unix(s.into())
    }

    /// Picks between a date/time field and a Unix field, preferring the
    /// date/time one when both are filled in.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] when both fields are blank.
    pub fn from_fields(date_time: &str, unix: &str) -> Result<Self> {
        if !date_time.trim().is_empty() {
            Ok(DateTimeInput::text(date_time))
        } else if !unix.trim().is_empty() {
            Ok(DateTimeInput::unix(unix))
        } else {
            Err(Error::empty_input("no date/time or Unix timestamp entered"))
        }
    }

    /// Label used in conversion history.
    #[must_use]
    pub const fn source_label(&self) -> &'static str {
        match self {
            DateTimeInput::Text(_) => "DateTime",
            DateTimeInput::Unix(_) => "Unix",
        }
    }

    fn raw(&self) -> &str {
        match self {
            DateTimeInput::Text(s) | DateTimeInput::Unix(s) => s.trim(),
        }
    }
}

/// One instant in every representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTimeConversion {
    /// `M/D/YYYY, h:mm:ss AM` in the target timezone.
    pub local: String,
    /// `Mon, 15 Jan 2024 10:30:00 GMT`.
    pub utc: String,
    /// Whole seconds since the epoch, rounded down.
    pub unix: i64,
}

impl fmt::Display for DateTimeConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Local: {}\nUTC: {}\nUnix: {}", self.local, self.utc, self.unix)
    }
}

/// Converts using the system timezone for local time.
pub fn convert(input: &DateTimeInput) -> Result<DateTimeConversion> {
    convert_in(input, &Local)
}

/// Converts using `tz` both to read wall-clock input and to render local
/// time.
///
/// # Errors
///
/// - [`Error::EmptyInput`] when the input is blank
/// - [`Error::InvalidFormat`] when it does not denote a valid instant
pub fn convert_in<Tz>(input: &DateTimeInput, tz: &Tz) -> Result<DateTimeConversion>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let raw = input.raw();
    if raw.is_empty() {
        return Err(Error::empty_input("no date/time entered"));
    }

    let instant = match input {
        DateTimeInput::Unix(_) => from_unix(raw)?,
        DateTimeInput::Text(_) => parse_text(raw, tz)?,
    };
    log::debug!("{} input '{}' is {}", input.source_label(), raw, instant);

    Ok(DateTimeConversion {
        local: instant.with_timezone(tz).format(LOCAL_FORMAT).to_string(),
        utc: instant.format(UTC_FORMAT).to_string(),
        unix: instant.timestamp(),
    })
}

fn from_unix(raw: &str) -> Result<DateTime<Utc>> {
    let secs: i64 = raw
        .parse()
        .map_err(|_| Error::invalid_format(format!("'{}' is not a Unix timestamp", raw)))?;
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| Error::invalid_format(format!("Unix timestamp {} is out of range", secs)))
}

fn parse_text<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let wall_clock = WALL_CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%m/%d/%Y")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });
    if let Some(naive) = wall_clock {
        return tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| {
                Error::invalid_format(format!("'{}' does not exist in the local timezone", raw))
            });
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| Error::invalid_format(format!("'{}' is not a recognized date/time", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use chrono::FixedOffset;

    fn plus_two() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    #[test]
    fn test_unix_input() {
        let out = convert_in(&DateTimeInput::unix("0"), &Utc).unwrap();
        assert_eq!(out.utc, "Thu, 01 Jan 1970 00:00:00 GMT");
        assert_eq!(out.local, "1/1/1970, 12:00:00 AM");
        assert_eq!(out.unix, 0);
    }

    #[test]
    fn test_negative_unix() {
        let out = convert_in(&DateTimeInput::unix("-86400"), &Utc).unwrap();
        assert_eq!(out.utc, "Wed, 31 Dec 1969 00:00:00 GMT");
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let out = convert_in(&DateTimeInput::text("2024-01-15T12:30:00+02:00"), &Utc).unwrap();
        assert_eq!(out.unix, 1705314600);
        assert_eq!(out.utc, "Mon, 15 Jan 2024 10:30:00 GMT");
    }

    #[test]
    fn test_rfc2822() {
        let out = convert_in(&DateTimeInput::text("Mon, 15 Jan 2024 10:30:00 +0000"), &Utc).unwrap();
        assert_eq!(out.unix, 1705314600);
    }

    #[test]
    fn test_wall_clock_uses_timezone() {
        let out = convert_in(&DateTimeInput::text("2024-01-15 12:30:00"), &plus_two()).unwrap();
        assert_eq!(out.unix, 1705314600);
        assert_eq!(out.local, "1/15/2024, 12:30:00 PM");
        assert_eq!(out.utc, "Mon, 15 Jan 2024 10:30:00 GMT");

        let short = convert_in(&DateTimeInput::text("2024-01-15T12:30"), &plus_two()).unwrap();
        assert_eq!(short.unix, 1705314600);

        let us = convert_in(&DateTimeInput::text("1/15/2024"), &Utc).unwrap();
        assert_eq!(us.utc, "Mon, 15 Jan 2024 00:00:00 GMT");
    }

    #[test]
    fn test_date_only_is_utc() {
        let out = convert_in(&DateTimeInput::text("2024-01-15"), &plus_two()).unwrap();
        assert_eq!(out.utc, "Mon, 15 Jan 2024 00:00:00 GMT");
        assert_eq!(out.local, "1/15/2024, 2:00:00 AM");
    }

    #[test]
    fn test_fractional_seconds_floor() {
        let out = convert_in(&DateTimeInput::text("1969-12-31T23:59:59.5Z"), &Utc).unwrap();
        assert_eq!(out.unix, -1);
    }

    #[test]
    fn test_invalid() {
        for input in [
            DateTimeInput::text("yesterday"),
            DateTimeInput::text("2024-02-30"),
            DateTimeInput::unix("12abc"),
            DateTimeInput::unix("99999999999999999999"),
        ] {
            let err = convert_in(&input, &Utc).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "{input:?}");
        }
    }

    #[test]
    fn test_empty() {
        let err = convert_in(&DateTimeInput::text("  "), &Utc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        assert!(DateTimeInput::from_fields("", " ").is_err());
    }

    #[test]
    fn test_from_fields_prefers_text() {
        assert_eq!(
            DateTimeInput::from_fields("2024-01-15", "0").unwrap(),
            DateTimeInput::text("2024-01-15")
        );
        assert_eq!(
            DateTimeInput::from_fields("", "0").unwrap().source_label(),
            "Unix"
        );
    }

    #[test]
    fn test_display() {
        let out = convert_in(&DateTimeInput::unix("1705314600"), &Utc).unwrap();
        assert_eq!(
            out.to_string(),
            "Local: 1/15/2024, 10:30:00 AM\nUTC: Mon, 15 Jan 2024 10:30:00 GMT\nUnix: 1705314600"
        );
    }
}
