//! Low-precision solar ephemeris and twilight classification.
//!
//! The sun position uses the mean-longitude + equation-of-center model:
//! good to a few arcminutes, which drives day/night shading and nothing
//! else. The twilight thresholds follow the civil/nautical convention
//! (0°, −6°, −12°).

use starhold_core::angle::wrap_0_360;

use crate::frames::EquatorialCoord;
use crate::instant::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Apparent equatorial position of the sun at the given instant.
pub fn sun_position(instant: &Instant) -> EquatorialCoord {
    let d = instant.days_since_j2000();

    // Mean longitude and mean anomaly of the sun, degrees.
    let l = wrap_0_360(280.460 + 0.985_647_4 * d);
    let g = wrap_0_360(357.528 + 0.985_600_3 * d).to_radians();

    // Ecliptic longitude with the equation of center.
    let lambda = (l + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).to_radians();

    // Obliquity of the ecliptic, slowly decreasing.
    let epsilon = (23.439 - 0.000_000_4 * d).to_radians();

    let ra = (epsilon.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (epsilon.sin() * lambda.sin()).asin();

    EquatorialCoord::from_degrees(wrap_0_360(ra.to_degrees()), dec.to_degrees())
}

/// Sky illumination phase, keyed off the sun's altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TwilightPhase {
    /// Sun above the horizon.
    Day,
    /// Sun between 0° and −6°.
    CivilTwilight,
    /// Sun between −6° and −12°.
    NauticalTwilight,
    /// Sun below −12°.
    Night,
}

impl TwilightPhase {
    /// Classifies a sun altitude in degrees.
    pub fn from_sun_altitude(altitude_deg: f64) -> Self {
        if altitude_deg > 0.0 {
            Self::Day
        } else if altitude_deg > -6.0 {
            Self::CivilTwilight
        } else if altitude_deg > -12.0 {
            Self::NauticalTwilight
        } else {
            Self::Night
        }
    }
}

/// Star opacity factor for the given sun altitude in degrees.
///
/// A continuous linear ramp: 0 at sun altitude −2° and above (stars washed
/// out), 1 at −15° and below (full dark), so the day/night transition fades
/// rather than snapping.
pub fn star_visibility(sun_altitude_deg: f64) -> f64 {
    if !sun_altitude_deg.is_finite() {
        return 1.0;
    }
    ((-2.0 - sun_altitude_deg) / 13.0).clamp(0.0, 1.0)
}
