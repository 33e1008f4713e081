//! # Temporal Types: UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp type rendered as ISO 8601 with
//! Z suffix at microsecond precision.
//!
//! ## Invariant
//!
//! Content identifiers and transaction receipts are derived by hashing a
//! payload together with the rendered timestamp. The rendering must
//! therefore be deterministic for a given instant: always UTC, always the
//! Z suffix, always six sub-second digits. Non-UTC inputs are rejected at
//! construction rather than silently converted.
//!
//! Sub-second precision is retained (unlike second-resolution schemes)
//! because two derivations in the same second must usually still produce
//! distinct identifiers. Precision is not uniqueness: two derivations in
//! the same microsecond with identical payloads collide, and nothing here
//! guards against that.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A UTC-only timestamp, truncated to microsecond precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] for the current UTC time, truncated.
/// - [`Timestamp::from_utc()`] from a `DateTime<Utc>`, truncating.
/// - [`Timestamp::parse()`] from an ISO 8601 string, rejecting non-UTC
///   offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to microseconds.
    pub fn now() -> Self {
        Self(truncate_to_micros(Utc::now()))
    }

    /// From a `chrono::DateTime<Utc>`, truncating sub-microsecond digits.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_micros(dt))
    }

    /// Parse an RFC 3339 / ISO 8601 string.
    ///
    /// Only the `Z` suffix is accepted. Explicit offsets are rejected,
    /// including `+00:00`, so that the canonical rendering of any accepted
    /// input round-trips byte-identically.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTimestamp`] when the string is not valid
    /// RFC 3339 or uses a non-Z offset.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if !s.ends_with('Z') {
            return Err(CoreError::InvalidTimestamp {
                value: s.to_string(),
                reason: "timestamp must use Z suffix (UTC only)".to_string(),
            });
        }
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| CoreError::InvalidTimestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(truncate_to_micros(dt.with_timezone(&Utc))))
    }

    /// Parse an RFC 3339 string, accepting any timezone offset and
    /// converting to UTC.
    ///
    /// This is a lenient parser for ingesting external data. The result is
    /// always UTC at microsecond precision, matching the strict invariant.
    ///
    /// For identifier and receipt derivation paths, prefer
    /// [`Timestamp::parse()`] which rejects non-UTC inputs.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTimestamp`] when the string is not valid
    /// RFC 3339.
    pub fn parse_lenient(s: &str) -> Result<Self, CoreError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| CoreError::InvalidTimestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(truncate_to_micros(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from a Unix epoch timestamp in microseconds.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTimestamp`] when the value is outside
    /// the representable date range.
    pub fn from_epoch_micros(micros: i64) -> Result<Self, CoreError> {
        let dt = DateTime::from_timestamp_micros(micros).ok_or_else(|| {
            CoreError::InvalidTimestamp {
                value: micros.to_string(),
                reason: "epoch microseconds out of range".to_string(),
            }
        })?;
        Ok(Self(dt))
    }

    /// Returns the Unix epoch timestamp in microseconds.
    pub fn epoch_micros(&self) -> i64 {
        self.0.timestamp_micros()
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as RFC 3339 with Z suffix and six sub-second digits,
    /// e.g. `2026-01-15T12:00:00.000000Z`.
    ///
    /// This is the rendering hashed into content ids and receipts.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Truncate a `DateTime<Utc>` to microsecond precision.
fn truncate_to_micros(dt: DateTime<Utc>) -> DateTime<Utc> {
    let micros = dt.nanosecond() / 1_000 * 1_000;
    dt.with_nanosecond(micros).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn now_has_no_sub_microsecond_digits() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond() % 1_000, 0);
    }

    #[test]
    fn from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let dt_with_nanos = dt.with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_utc(dt_with_nanos);
        assert_eq!(ts.as_datetime().nanosecond(), 123_456_000);
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:30:45.123456Z");
    }

    #[test]
    fn rendering_always_has_six_subsecond_digits() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let ts = Timestamp::from_utc(dt);
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:00:00.000000Z");
    }

    #[test]
    fn display_matches_rendering() {
        let dt = Utc.with_ymd_and_hms(2026, 6, 30, 23, 59, 59).unwrap();
        let ts = Timestamp::from_utc(dt);
        assert_eq!(format!("{ts}"), ts.to_rfc3339());
    }

    #[test]
    fn parse_z_suffix_accepted() {
        let ts = Timestamp::parse("2026-01-15T12:00:00.000000Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:00:00.000000Z");
    }

    #[test]
    fn parse_plus_zero_offset_rejected() {
        assert!(Timestamp::parse("2026-01-15T12:00:00+00:00").is_err());
    }

    #[test]
    fn parse_positive_offset_rejected() {
        assert!(Timestamp::parse("2026-01-15T17:00:00+05:00").is_err());
    }

    #[test]
    fn parse_invalid_format_rejected() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2026-01-15").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn parse_lenient_converts_offset() {
        let ts = Timestamp::parse_lenient("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:00:00.000000Z");
    }

    #[test]
    fn parse_lenient_accepts_z() {
        let ts = Timestamp::parse_lenient("2026-01-15T12:00:00.500000Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:00:00.500000Z");
    }

    #[test]
    fn parse_lenient_still_rejects_garbage() {
        assert!(Timestamp::parse_lenient("not-a-date").is_err());
    }

    #[test]
    fn epoch_micros_roundtrip() {
        let ts = Timestamp::parse("2026-01-15T12:00:00.123456Z").unwrap();
        let micros = ts.epoch_micros();
        assert_eq!(Timestamp::from_epoch_micros(micros).unwrap(), ts);
    }

    #[test]
    fn from_epoch_micros_zero_is_unix_epoch() {
        let ts = Timestamp::from_epoch_micros(0).unwrap();
        assert_eq!(ts.to_rfc3339(), "1970-01-01T00:00:00.000000Z");
    }

    #[test]
    fn from_epoch_micros_out_of_range_rejected() {
        assert!(Timestamp::from_epoch_micros(i64::MAX).is_err());
    }

    #[test]
    fn parse_truncates_nanoseconds() {
        let ts = Timestamp::parse("2026-01-15T12:00:00.123456789Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:00:00.123456Z");
    }

    #[test]
    fn ordering() {
        let earlier = Timestamp::parse("2026-01-15T12:00:00.000001Z").unwrap();
        let later = Timestamp::parse("2026-01-15T12:00:00.000002Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn serde_roundtrip() {
        let ts = Timestamp::parse("2026-01-15T12:00:00.000000Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }
}
