//! Sexagesimal formatting for celestial coordinates.
//!
//! Right ascension is quoted in hours-minutes-seconds (`07h 34m 06.0s`),
//! declination in signed degrees-arcminutes-arcseconds (`+31° 53' 18"`).
//! These match the notation the rest of the product surfaces to users.

use super::Angle;
use crate::angle::wrap_0_360;

/// Formats a right ascension as `HHh MMm SS.Ss`.
///
/// The input is wrapped into [0, 360) first, so negative or >360° values
/// format as their equivalent direction.
pub fn format_ra_hms(ra: Angle) -> String {
    let total_hours = wrap_0_360(ra.degrees()) / 15.0;
    let hours = total_hours.floor();
    let m = (total_hours - hours) * 60.0;
    let minutes = m.floor();
    let seconds = (m - minutes) * 60.0;
    format!("{:02}h {:02}m {:04.1}s", hours as u32, minutes as u32, seconds)
}

/// Formats a declination as `+DD° MM' SS"` with an explicit sign.
pub fn format_dec_dms(dec: Angle) -> String {
    let deg = dec.degrees();
    let sign = if deg >= 0.0 { '+' } else { '-' };
    let abs = deg.abs();
    let degrees = abs.floor();
    let m = (abs - degrees) * 60.0;
    let minutes = m.floor();
    let seconds = (m - minutes) * 60.0;
    format!(
        "{}{:02}° {:02}' {:02.0}\"",
        sign, degrees as u32, minutes as u32, seconds
    )
}
