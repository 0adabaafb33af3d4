//! Simplified lunar position.
//!
//! Three-term lunar theory: mean longitude, the largest elliptic term, and
//! the largest latitude term. Accurate to a fraction of a degree, enough
//! to plot the moon among the stars.

use starhold_core::angle::wrap_0_360;

use crate::frames::EquatorialCoord;
use crate::instant::Instant;

/// Apparent equatorial position of the moon at the given instant.
pub fn moon_position(instant: &Instant) -> EquatorialCoord {
    let d = instant.days_since_j2000();

    // Mean longitude, mean anomaly, mean distance from the ascending node.
    let l = wrap_0_360(218.316 + 13.176_396 * d);
    let m = wrap_0_360(134.963 + 13.064_993 * d).to_radians();
    let f = wrap_0_360(93.272 + 13.229_350 * d).to_radians();

    // Ecliptic longitude and latitude.
    let lambda = (l + 6.289 * m.sin()).to_radians();
    let beta = (5.128 * f.sin()).to_radians();

    let epsilon = 23.439_f64.to_radians();

    // Ecliptic to equatorial.
    let ra = (lambda.sin() * epsilon.cos() - beta.tan() * epsilon.sin()).atan2(lambda.cos());
    let dec =
        (beta.sin() * epsilon.cos() + beta.cos() * epsilon.sin() * lambda.sin()).asin();

    EquatorialCoord::from_degrees(wrap_0_360(ra.to_degrees()), dec.to_degrees())
}
