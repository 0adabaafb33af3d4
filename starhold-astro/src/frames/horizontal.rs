//! Observer-relative directions.

use starhold_core::angle::{clamp_dec, wrap_0_2pi};
use starhold_core::Angle;

use super::equatorial::EquatorialCoord;
use crate::observer::ObserverContext;
use crate::sidereal::local_sidereal_time;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A direction in the observer's sky: azimuth from north (eastward) in
/// [0, 360), altitude above the horizon in [-90, 90].
///
/// Derived on demand from an [`EquatorialCoord`] plus observer context;
/// never cached beyond a single render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoord {
    azimuth: Angle,
    altitude: Angle,
}

impl HorizontalCoord {
    /// Creates a coordinate from degree values.
    ///
    /// Total, with the same normalization policy as
    /// [`EquatorialCoord::from_degrees`]: azimuth wraps, altitude clamps,
    /// non-finite components collapse to 0.
    pub fn from_degrees(azimuth_deg: f64, altitude_deg: f64) -> Self {
        let az = if azimuth_deg.is_finite() {
            azimuth_deg
        } else {
            0.0
        };
        let alt = if altitude_deg.is_finite() {
            altitude_deg
        } else {
            0.0
        };
        Self {
            azimuth: Angle::from_radians(wrap_0_2pi(az.to_radians())),
            altitude: Angle::from_radians(clamp_dec(alt.to_radians())),
        }
    }

    /// The zenith-pointing default used when no observer reference exists.
    pub fn zenith() -> Self {
        Self {
            azimuth: Angle::ZERO,
            altitude: Angle::HALF_PI,
        }
    }

    /// Azimuth from north, increasing eastward.
    #[inline]
    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    /// Altitude above the horizon.
    #[inline]
    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    /// True when the direction is above the horizon.
    #[inline]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude.radians() > 0.0
    }

    /// Transforms back to the equatorial frame: the exact algebraic
    /// inverse of [`EquatorialCoord::to_horizontal`].
    ///
    /// Total; a non-finite intermediate collapses to the equinox point
    /// rather than propagating.
    pub fn to_equatorial(&self, observer: &ObserverContext) -> EquatorialCoord {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_alt, cos_alt) = self.altitude.sin_cos();
        let (sin_lat, cos_lat) = observer.location.latitude_angle().sin_cos();

        let sin_dec = sin_alt * sin_lat + cos_alt * cos_lat * cos_az;
        let dec = sin_dec.clamp(-1.0, 1.0).asin();
        let cos_dec = dec.cos();

        // Degenerate at the celestial poles: hour angle is undefined there,
        // so it is pinned to zero.
        let (sin_ha, cos_ha) = if cos_dec.abs() < 1e-10 {
            (0.0, 0.0)
        } else {
            (
                -sin_az * cos_alt / cos_dec,
                (sin_alt - sin_dec * sin_lat) / (cos_dec * cos_lat),
            )
        };
        let ha = sin_ha.atan2(cos_ha);

        let lst = local_sidereal_time(&observer.instant, observer.location.longitude_angle());
        let ra = wrap_0_2pi(lst.radians() - ha);

        if !ra.is_finite() || !dec.is_finite() {
            return EquatorialCoord::from_degrees(0.0, 0.0);
        }

        EquatorialCoord::from_degrees(ra.to_degrees(), dec.to_degrees())
    }
}

impl std::fmt::Display for HorizontalCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Az {:.2}° Alt {:.2}°",
            self.azimuth.degrees(),
            self.altitude.degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instant::Instant;
    use starhold_core::Location;

    fn observer(lat: f64, lng: f64) -> ObserverContext {
        ObserverContext::new(
            Location::from_degrees(lat, lng).unwrap(),
            Instant::from_utc(2024, 6, 1, 22, 30, 0).unwrap(),
        )
    }

    #[test]
    fn constructor_normalizes() {
        let hz = HorizontalCoord::from_degrees(365.0, -95.0);
        assert!((hz.azimuth().degrees() - 5.0).abs() < 1e-10);
        assert!((hz.altitude().degrees() + 90.0).abs() < 1e-10);

        let hz = HorizontalCoord::from_degrees(f64::NAN, f64::NAN);
        assert_eq!(hz.azimuth().degrees(), 0.0);
        assert_eq!(hz.altitude().degrees(), 0.0);
    }

    #[test]
    fn zenith_default() {
        let z = HorizontalCoord::zenith();
        assert_eq!(z.azimuth().degrees(), 0.0);
        assert_eq!(z.altitude().degrees(), 90.0);
        assert!(z.is_above_horizon());
    }

    #[test]
    fn round_trip_within_tolerance() {
        // Property 1 of the contract: eq -> hz -> eq recovers the input
        // within 1e-6 degrees away from the poles.
        let obs = observer(51.4769, -0.1278);
        for ra in [0.0, 45.0, 123.456, 200.0, 359.5] {
            for dec in [-89.0, -45.0, -0.5, 0.0, 30.0, 89.0] {
                let eq = EquatorialCoord::from_degrees(ra, dec);
                let back = eq.to_horizontal(Some(&obs)).to_equatorial(&obs);
                let dra = (back.ra().degrees() - eq.ra().degrees()).abs();
                let dra = dra.min(360.0 - dra);
                // RA precision degrades with 1/cos(dec); compare on-sky.
                assert!(
                    dra * dec.to_radians().cos() < 1e-6,
                    "RA drift {} at ra={} dec={}",
                    dra,
                    ra,
                    dec
                );
                assert!(
                    (back.dec().degrees() - eq.dec().degrees()).abs() < 1e-6,
                    "Dec drift at ra={} dec={}",
                    ra,
                    dec
                );
            }
        }
    }

    #[test]
    fn round_trip_southern_hemisphere() {
        let obs = observer(-33.9249, 18.4241);
        for (ra, dec) in [(10.0, -70.0), (180.0, 15.0), (300.0, -33.0)] {
            let eq = EquatorialCoord::from_degrees(ra, dec);
            let back = eq.to_horizontal(Some(&obs)).to_equatorial(&obs);
            assert!((back.dec().degrees() - dec).abs() < 1e-6);
        }
    }

    #[test]
    fn degenerate_pole_input_is_total() {
        let obs = observer(51.4769, 0.0);
        // Pointing at the celestial pole from this latitude.
        let hz = HorizontalCoord::from_degrees(0.0, 51.4769);
        let eq = hz.to_equatorial(&obs);
        assert!(eq.ra().degrees().is_finite());
        assert!((eq.dec().degrees() - 90.0).abs() < 1e-6);
    }
}
