//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp type truncated to seconds
//! precision. Every date the back office exchanges with the backend —
//! contract milestones, audit-trail rows, schedule entries — is an ISO8601
//! string with a `Z` suffix; this type enforces that shape at construction
//! so the rest of the workspace never reasons about local offsets.
//!
//! Non-UTC inputs are rejected by [`Timestamp::parse()`]. Ingestion paths
//! that must tolerate backend payloads with explicit offsets go through
//! [`Timestamp::parse_lenient()`], which converts to UTC instead of
//! rejecting.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReboError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO8601 string, rejecting non-UTC offsets.
/// - [`Timestamp::parse_lenient()`] — from an ISO8601 string, converting to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO8601 string.
    ///
    /// **Rejects non-UTC inputs.** Only timestamps with the `Z` suffix are
    /// accepted — even `+00:00`, which is semantically equivalent, is
    /// rejected so that stored representations stay uniform.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a
    /// non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, ReboError> {
        if !s.ends_with('Z') {
            return Err(ReboError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            ReboError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any timezone
    /// offset and converting to UTC.
    ///
    /// This is the lenient parser for ingesting backend payloads. The
    /// result is always UTC with seconds precision, matching the strict
    /// invariant.
    pub fn parse_lenient(s: &str) -> Result<Self, ReboError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            ReboError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, ReboError> {
        let dt = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
            ReboError::InvalidTimestamp(format!("invalid Unix timestamp: {secs}"))
        })?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as ISO8601 with Z suffix (e.g., `2024-01-10T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 10, 12, 30, 45).unwrap();
        let dt_with_nanos = dt.with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_utc(dt_with_nanos);
        assert_eq!(ts.as_datetime().nanosecond(), 0);
        assert_eq!(ts.to_iso8601(), "2024-01-10T12:30:45Z");
    }

    #[test]
    fn test_display_matches_iso8601() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap();
        let ts = Timestamp::from_utc(dt);
        assert_eq!(format!("{ts}"), ts.to_iso8601());
    }

    // ---- parse() strict mode ----

    #[test]
    fn test_parse_z_suffix_accepted() {
        let ts = Timestamp::parse("2024-01-10T12:00:00Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-10T12:00:00Z");
    }

    #[test]
    fn test_parse_plus_zero_rejected() {
        assert!(Timestamp::parse("2024-01-10T12:00:00+00:00").is_err());
    }

    #[test]
    fn test_parse_positive_offset_rejected() {
        assert!(Timestamp::parse("2024-01-10T21:00:00+09:00").is_err());
    }

    #[test]
    fn test_parse_subseconds_truncated() {
        let ts = Timestamp::parse("2024-01-10T12:00:00.123456Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-10T12:00:00Z");
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2024-01-10").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    // ---- parse_lenient() ----

    #[test]
    fn test_parse_lenient_converts_offset() {
        let ts = Timestamp::parse_lenient("2024-01-10T21:00:00+09:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-10T12:00:00Z");
    }

    #[test]
    fn test_parse_lenient_accepts_z() {
        let ts = Timestamp::parse_lenient("2024-01-10T12:00:00Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-10T12:00:00Z");
    }

    // ---- epoch ----

    #[test]
    fn test_epoch_roundtrip() {
        let ts = Timestamp::parse("2024-01-10T12:00:00Z").unwrap();
        let ts2 = Timestamp::from_epoch_secs(ts.epoch_secs()).unwrap();
        assert_eq!(ts, ts2);
    }

    // ---- ordering ----

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::parse("2024-01-10T12:00:00Z").unwrap();
        let later = Timestamp::parse("2024-01-10T12:00:01Z").unwrap();
        assert!(earlier < later);
    }

    // ---- serde ----

    #[test]
    fn test_serde_roundtrip() {
        let ts = Timestamp::parse("2024-01-10T12:00:00Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }
}
