//! Observer location on Earth.
//!
//! [`Location`] carries the geographic latitude/longitude an external
//! location picker supplies. Construction validates ranges; once built, a
//! location is immutable and cheap to copy.
//!
//! ```
//! use starhold_core::Location;
//!
//! // Royal Observatory, Greenwich
//! let obs = Location::from_degrees(51.4769, 0.0)?;
//! assert!((obs.latitude_degrees() - 51.4769).abs() < 1e-10);
//! # Ok::<(), starhold_core::CoreError>(())
//! ```

use crate::angle::Angle;
use crate::errors::{CoreError, CoreResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic position: latitude north-positive in [-90, 90], longitude
/// east-positive in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl Location {
    /// Creates a location from degree coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFinite`] for NaN/infinite input and
    /// [`CoreError::InvalidCoordinate`] for out-of-range values.
    pub fn from_degrees(latitude: f64, longitude: f64) -> CoreResult<Self> {
        if !latitude.is_finite() {
            return Err(CoreError::not_finite("latitude"));
        }
        if !longitude.is_finite() {
            return Err(CoreError::not_finite("longitude"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::invalid_coordinate(format!(
                "latitude {} outside [-90, 90]",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::invalid_coordinate(format!(
                "longitude {} outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude_deg: latitude,
            longitude_deg: longitude,
        })
    }

    /// Latitude in degrees, north positive.
    #[inline]
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive.
    #[inline]
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude as an [`Angle`].
    #[inline]
    pub fn latitude_angle(&self) -> Angle {
        Angle::from_degrees(self.latitude_deg)
    }

    /// Longitude as an [`Angle`].
    #[inline]
    pub fn longitude_angle(&self) -> Angle {
        Angle::from_degrees(self.longitude_deg)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude_deg >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude_deg >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude_deg.abs(),
            ns,
            self.longitude_deg.abs(),
            ew
        )
    }
}
