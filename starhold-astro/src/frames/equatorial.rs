//! Fixed points on the celestial sphere.

use starhold_core::angle::{clamp_dec, wrap_0_2pi};
use starhold_core::constants::TWOPI;
use starhold_core::Angle;

use super::horizontal::HorizontalCoord;
use crate::observer::ObserverContext;
use crate::sidereal::local_sidereal_time;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position on the celestial sphere: right ascension in [0, 360),
/// declination in [-90, 90]. Epoch J2000 assumed throughout; no precession
/// correction is ever applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoord {
    ra: Angle,
    dec: Angle,
}

impl EquatorialCoord {
    /// Creates a coordinate from degree values.
    ///
    /// Total: RA wraps into [0, 360), declination clamps into [-90, 90],
    /// and a non-finite component collapses to 0, the documented neutral
    /// value, so corrupted input cannot smuggle NaN into the pipeline.
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        let ra = if ra_deg.is_finite() { ra_deg } else { 0.0 };
        let dec = if dec_deg.is_finite() { dec_deg } else { 0.0 };
        Self {
            ra: Angle::from_radians(wrap_0_2pi(ra.to_radians())),
            dec: Angle::from_radians(clamp_dec(dec.to_radians())),
        }
    }

    /// Right ascension.
    #[inline]
    pub fn ra(&self) -> Angle {
        self.ra
    }

    /// Declination.
    #[inline]
    pub fn dec(&self) -> Angle {
        self.dec
    }

    /// Hour angle of this coordinate for the given observer: LST − RA,
    /// wrapped to [0, 2pi).
    pub fn hour_angle(&self, observer: &ObserverContext) -> Angle {
        let lst = local_sidereal_time(&observer.instant, observer.location.longitude_angle());
        Angle::from_radians(wrap_0_2pi(lst.radians() - self.ra.radians()))
    }

    /// Transforms to the observer's horizontal frame.
    ///
    /// Computes the unit vector in the Az/El system from the hour angle and
    /// reads azimuth (from north, eastward) and altitude off it with the
    /// two-argument arctangent, which is stable at every non-degenerate
    /// geometry.
    ///
    /// Total. With no observer the result is the zenith-pointing default
    /// `{azimuth: 0, altitude: 90}`; the same fallback is substituted if a
    /// non-finite value ever emerges from the trigonometry.
    pub fn to_horizontal(&self, observer: Option<&ObserverContext>) -> HorizontalCoord {
        let Some(obs) = observer else {
            return HorizontalCoord::zenith();
        };

        let (sin_ha, cos_ha) = self.hour_angle(obs).sin_cos();
        let (sin_dec, cos_dec) = self.dec.sin_cos();
        let (sin_lat, cos_lat) = obs.location.latitude_angle().sin_cos();

        let x = -cos_ha * cos_dec * sin_lat + sin_dec * cos_lat;
        let y = -sin_ha * cos_dec;
        let z = cos_ha * cos_dec * cos_lat + sin_dec * sin_lat;

        let r = (x * x + y * y).sqrt();
        let raw_az = if r != 0.0 { y.atan2(x) } else { 0.0 };
        let azimuth = if raw_az < 0.0 { raw_az + TWOPI } else { raw_az };
        let altitude = z.atan2(r);

        if !azimuth.is_finite() || !altitude.is_finite() {
            return HorizontalCoord::zenith();
        }

        HorizontalCoord::from_degrees(azimuth.to_degrees(), altitude.to_degrees())
    }

    /// Parallactic angle at this coordinate for the given observer: the
    /// angle between the celestial pole and the zenith, used to orient
    /// objects correctly near the horizon in a horizon-referenced view.
    ///
    /// `q = atan2(sin H, tan φ · cos δ − sin δ · cos H)`
    pub fn parallactic_angle(&self, observer: &ObserverContext) -> Angle {
        let (sin_ha, cos_ha) = self.hour_angle(observer).sin_cos();
        let (sin_dec, cos_dec) = self.dec.sin_cos();
        let lat = observer.location.latitude_angle();

        let numerator = sin_ha;
        let denominator = lat.tan() * cos_dec - sin_dec * cos_ha;
        let q = numerator.atan2(denominator);

        if q.is_finite() {
            Angle::from_radians(q)
        } else {
            Angle::ZERO
        }
    }

    /// Angular separation to another coordinate, for nearest-object queries.
    pub fn separation(&self, other: &EquatorialCoord) -> Angle {
        let (sin_d1, cos_d1) = self.dec.sin_cos();
        let (sin_d2, cos_d2) = other.dec.sin_cos();
        let cos_dra = (self.ra - other.ra).cos();
        let c = (sin_d1 * sin_d2 + cos_d1 * cos_d2 * cos_dra).clamp(-1.0, 1.0);
        Angle::from_radians(c.acos())
    }
}

impl std::fmt::Display for EquatorialCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "α {} δ {}",
            starhold_core::angle::format_ra_hms(self.ra),
            starhold_core::angle::format_dec_dms(self.dec)
        )
    }
}
