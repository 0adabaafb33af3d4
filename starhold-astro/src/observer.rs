//! Observer context: where and when the sky is being looked at.

use starhold_core::{Angle, Location};

use crate::instant::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic position paired with an instant.
///
/// Supplied by an external location/time picker. Transforms that need a
/// horizon take `Option<&ObserverContext>`; absence selects the
/// zenith-pointing default documented on
/// [`EquatorialCoord::to_horizontal`](crate::EquatorialCoord::to_horizontal).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObserverContext {
    pub location: Location,
    pub instant: Instant,
}

impl ObserverContext {
    pub fn new(location: Location, instant: Instant) -> Self {
        Self { location, instant }
    }

    /// Local sidereal time at this observer's longitude.
    pub fn local_sidereal_time(&self) -> Angle {
        crate::sidereal::local_sidereal_time(&self.instant, self.location.longitude_angle())
    }
}
