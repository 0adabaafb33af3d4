//! A point in civil time, timezone-agnostic.
//!
//! [`Instant`] wraps a `chrono::DateTime<Utc>` and exposes the Julian-date
//! view every formula in this crate consumes. Immutable once constructed.
//!
//! ```
//! use starhold_astro::Instant;
//!
//! let t = Instant::from_utc(2000, 1, 1, 12, 0, 0)?;
//! assert!((t.julian_date() - 2_451_545.0).abs() < 1e-9);
//! assert_eq!(t.days_since_j2000(), 0.0);
//! # Ok::<(), starhold_astro::AstroError>(())
//! ```

use chrono::{DateTime, TimeZone, Utc};
use starhold_core::constants::{J2000_JD, MS_PER_DAY, UNIX_EPOCH_JD};

use crate::errors::{AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An instant in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// The J2000.0 reference epoch, 2000-01-01T12:00:00Z.
    pub fn j2000() -> Self {
        Self(Utc.timestamp_millis_opt(946_728_000_000).unwrap())
    }

    /// Creates an instant from Unix epoch milliseconds.
    ///
    /// Total: values beyond chrono's representable year range collapse to
    /// the Unix epoch, the documented neutral output.
    pub fn from_unix_millis(millis: i64) -> Self {
        Self(
            Utc.timestamp_millis_opt(millis)
                .single()
                .unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap()),
        )
    }

    /// Creates an instant from UTC civil components.
    ///
    /// # Errors
    ///
    /// Returns [`AstroError::InvalidDate`] for nonexistent dates or times.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> AstroResult<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .map(Self)
            .ok_or(AstroError::InvalidDate {
                year,
                month,
                day,
                hour,
                minute,
                second,
            })
    }

    /// Creates an instant from a Julian date.
    ///
    /// # Errors
    ///
    /// Returns [`AstroError::JulianOutOfRange`] when the date cannot be
    /// represented as epoch milliseconds (non-finite or astronomically far).
    pub fn from_julian_date(jd: f64) -> AstroResult<Self> {
        let millis = (jd - UNIX_EPOCH_JD) * MS_PER_DAY;
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return Err(AstroError::JulianOutOfRange { jd });
        }
        let dt = Utc
            .timestamp_millis_opt(millis.round() as i64)
            .single()
            .ok_or(AstroError::JulianOutOfRange { jd })?;
        Ok(Self(dt))
    }

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub fn unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The Julian date of this instant.
    #[inline]
    pub fn julian_date(&self) -> f64 {
        self.unix_millis() as f64 / MS_PER_DAY + UNIX_EPOCH_JD
    }

    /// Days elapsed since J2000.0 (negative before it).
    #[inline]
    pub fn days_since_j2000(&self) -> f64 {
        self.julian_date() - J2000_JD
    }

    /// The wrapped chrono value, for callers that need calendar arithmetic.
    #[inline]
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_julian_date() {
        let t = Instant::j2000();
        assert!((t.julian_date() - 2_451_545.0).abs() < 1e-9);
        assert_eq!(t.days_since_j2000(), 0.0);
    }

    #[test]
    fn civil_construction() {
        let t = Instant::from_utc(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(t, Instant::j2000());

        assert!(matches!(
            Instant::from_utc(2000, 2, 30, 0, 0, 0),
            Err(AstroError::InvalidDate { .. })
        ));
        assert!(Instant::from_utc(2000, 1, 1, 25, 0, 0).is_err());
    }

    #[test]
    fn unix_millis_round_trip() {
        let t = Instant::from_unix_millis(1_907_712_000_000);
        assert_eq!(t.unix_millis(), 1_907_712_000_000);
        // 2030-06-15T00:00:00Z
        assert!((t.julian_date() - 2_462_667.5).abs() < 1e-9);
    }

    #[test]
    fn julian_round_trip() {
        let t = Instant::from_julian_date(2_451_545.0).unwrap();
        assert_eq!(t, Instant::j2000());

        assert!(Instant::from_julian_date(f64::NAN).is_err());
        assert!(Instant::from_julian_date(1e30).is_err());
    }

    #[test]
    fn display_iso() {
        assert_eq!(format!("{}", Instant::j2000()), "2000-01-01T12:00:00Z");
    }
}
