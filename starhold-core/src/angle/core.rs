//! Core angle type for celestial calculations.
//!
//! [`Angle`] stores radians internally (every trig function wants radians;
//! storing them avoids repeated conversions mid-calculation) and converts
//! to and from degrees and hours at the API boundary. Right ascension is
//! traditionally quoted in hours, where 24h = 360°.
//!
//! ```
//! use starhold_core::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-10);
//!
//! let (sin, cos) = Angle::from_degrees(45.0).sin_cos();
//! assert!((sin - cos).abs() < 1e-12);
//! ```

use crate::constants::{DEG_PER_HOUR, HALF_PI, PI};

/// An angular measurement stored as radians.
///
/// `Copy` because an angle is 8 bytes; `Eq`/`Ord` are deliberately absent
/// because the backing f64 can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Pi radians (180°).
    pub const PI: Self = Self { rad: PI };

    /// Pi/2 radians (90°): the zenith distance of the horizon, the
    /// declination of the celestial pole.
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Creates an angle from radians. The only `const` constructor because
    /// radians are the internal representation.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from hours of right ascension (1h = 15°).
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * DEG_PER_HOUR).to_radians(),
        }
    }

    /// The angle in radians.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.rad
    }

    /// The angle in degrees.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.rad.to_degrees()
    }

    /// The angle in hours (15° per hour).
    #[inline]
    pub fn hours(&self) -> f64 {
        self.rad.to_degrees() / DEG_PER_HOUR
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(&self) -> f64 {
        self.rad.sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(&self) -> f64 {
        self.rad.cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(&self) -> f64 {
        self.rad.tan()
    }

    /// Sine and cosine in one call.
    #[inline]
    pub fn sin_cos(&self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    /// True when the backing value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rad.is_finite()
    }

    /// This angle wrapped to [0, 2pi).
    #[inline]
    pub fn wrapped_0_2pi(&self) -> Self {
        Self {
            rad: super::wrap_0_2pi(self.rad),
        }
    }

    /// This angle wrapped to [-pi, +pi).
    #[inline]
    pub fn wrapped_pm_pi(&self) -> Self {
        Self {
            rad: super::wrap_pm_pi(self.rad),
        }
    }

    /// This angle clamped to [-pi/2, +pi/2].
    #[inline]
    pub fn clamped_dec(&self) -> Self {
        Self {
            rad: super::clamp_dec(self.rad),
        }
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Angle;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Serialized as decimal degrees: that is the unit every external
    // collaborator (catalog JSON, memory records) speaks.
    impl Serialize for Angle {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.degrees().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Angle {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            f64::deserialize(deserializer).map(Angle::from_degrees)
        }
    }
}
