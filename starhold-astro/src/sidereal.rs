//! Sidereal time, display grade.
//!
//! Greenwich Mean Sidereal Time here is the single-term polynomial
//! `280.46061837 + 360.98564736629 · d` (d = days from J2000.0), wrapped to
//! [0, 360). No leap seconds, no equation of the equinoxes. Good to a few
//! arcseconds over decades, which is far below the pixel size of any sky
//! view this feeds.

use starhold_core::angle::wrap_0_360;
use starhold_core::Angle;

use crate::instant::Instant;

/// Greenwich Mean Sidereal Time as an angle in [0, 360).
pub fn gmst(instant: &Instant) -> Angle {
    let d = instant.days_since_j2000();
    Angle::from_degrees(wrap_0_360(280.460_618_37 + 360.985_647_366_29 * d))
}

/// Local Sidereal Time: GMST corrected by the observer's east longitude,
/// wrapped to [0, 360).
pub fn local_sidereal_time(instant: &Instant, longitude: Angle) -> Angle {
    Angle::from_degrees(wrap_0_360(
        gmst(instant).degrees() + longitude.degrees(),
    ))
}
