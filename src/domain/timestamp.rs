//! Build timestamp parsing
//!
//! Accepts the formats produced by common `date` invocations:
//! - `date -R` (RFC 1123 with numeric zone): `Fri, 23 Aug 2019 11:00:00 -0700`
//! - `date -u +%Y-%m-%dT%H:%M:%SZ`: `2019-08-23T18:00:00Z`
//! - `date -Iseconds` (RFC 3339): `2019-08-23T11:00:00-07:00`
//! - ISO 8601 without the offset colon: `2019-08-23T11:00:00-0700`

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

use crate::error::{MetaError, Result};
use crate::field::Field;

/// `Fri, 23 Aug 2019 11:00:00 -0700`. The weekday name must be a real one
/// but is not checked against the date.
static RFC1123Z_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun), ([0-9]{2} [A-Z][a-z]{2} [0-9]{4} [0-9]{2}:[0-9]{2}:[0-9]{2} [+-][0-9]{4})$",
    )
    .expect("rfc1123z pattern")
});

static ISO8601_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:Z|[+-][0-9]{2}:[0-9]{2}|[+-][0-9]{4})$",
    )
    .expect("iso8601 pattern")
});

const RFC1123Z_DATE: &str = "%d %b %Y %H:%M:%S %z";
const ISO8601_ZULU: &str = "%Y-%m-%dT%H:%M:%SZ";
const ISO8601_COLON_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%:z";
const ISO8601_COMPACT_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parse a timestamp and normalize it to UTC. Empty input yields `None`.
///
/// Only the exact shapes listed in the module docs are accepted: no space
/// separator, no lowercase `t`/`z`, and the RFC 1123 zone has no colon.
pub fn parse_timestamp(field: Field, value: &str) -> Result<Option<DateTime<Utc>>> {
    if value.is_empty() {
        return Ok(None);
    }

    parse_rfc1123z(value)
        .or_else(|| parse_iso8601(value))
        .map(|dt| Some(to_utc(dt)))
        .ok_or_else(|| {
            MetaError::invalid(field, value, "not an RFC 1123, RFC 3339 or ISO 8601 timestamp")
        })
}

fn parse_rfc1123z(value: &str) -> Option<DateTime<FixedOffset>> {
    let captures = RFC1123Z_SHAPE.captures(value)?;
    let date = captures.get(1)?.as_str();
    DateTime::parse_from_str(date, RFC1123Z_DATE).ok()
}

fn parse_iso8601(value: &str) -> Option<DateTime<FixedOffset>> {
    if !ISO8601_SHAPE.is_match(value) {
        return None;
    }

    if value.ends_with('Z') {
        NaiveDateTime::parse_from_str(value, ISO8601_ZULU)
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    } else if value.as_bytes().get(value.len() - 3) == Some(&b':') {
        DateTime::parse_from_str(value, ISO8601_COLON_OFFSET).ok()
    } else {
        DateTime::parse_from_str(value, ISO8601_COMPACT_OFFSET).ok()
    }
}

fn to_utc(dt: DateTime<FixedOffset>) -> DateTime<Utc> {
    dt.with_timezone(&Utc)
}

/// Render a timestamp with a strftime-style layout.
///
/// Unknown specifiers in `layout` are reported as an error instead of
/// panicking at display time.
pub fn format_timestamp(ts: &DateTime<Utc>, layout: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", ts.format(layout))
        .map_err(|_| MetaError::format(format!("Invalid date layout: '{}'", layout)))?;
    Ok(out)
}
