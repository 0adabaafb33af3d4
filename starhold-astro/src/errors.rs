//! Error types for time construction.
//!
//! The transform functions in this crate are total and never return errors;
//! only building an [`Instant`](crate::Instant) from untrusted civil input
//! can fail.

use thiserror::Error;

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AstroError {
    /// Invalid calendar date or time-of-day (e.g. February 30, 25:00).
    #[error("Invalid date {year}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },

    /// Julian date outside the representable millisecond range.
    #[error("Julian date {jd} outside representable range")]
    JulianOutOfRange { jd: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = AstroError::InvalidDate {
            year: 2000,
            month: 2,
            day: 30,
            hour: 0,
            minute: 0,
            second: 0,
        };
        assert_eq!(err.to_string(), "Invalid date 2000-02-30 00:00:00");
    }
}
