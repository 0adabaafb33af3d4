//! Day/night shading, derived purely from the sun.
//!
//! The sun's altitude for the current observer picks the background phase
//! (day, civil twilight, nautical twilight, night) and a continuous star
//! opacity factor, so sunset fades the stars in rather than switching them
//! on. Without an observer there is no horizon and no daylight: the view
//! renders as full night.

use starhold_astro::{star_visibility, sun_position, ObserverContext, TwilightPhase};

/// The shading inputs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyShading {
    /// Background selection.
    pub phase: TwilightPhase,
    /// Star opacity factor in [0, 1].
    pub star_visibility: f64,
    /// Sun altitude in degrees, for collaborators that want the raw value.
    pub sun_altitude_deg: f64,
}

impl SkyShading {
    /// Computes shading for the observer, or the full-night default when
    /// no observer context exists.
    pub fn compute(observer: Option<&ObserverContext>) -> Self {
        let Some(obs) = observer else {
            return Self::night();
        };

        let sun = sun_position(&obs.instant);
        let altitude = sun.to_horizontal(Some(obs)).altitude().degrees();

        Self {
            phase: TwilightPhase::from_sun_altitude(altitude),
            star_visibility: star_visibility(altitude),
            sun_altitude_deg: altitude,
        }
    }

    /// Full-dark shading.
    pub fn night() -> Self {
        Self {
            phase: TwilightPhase::Night,
            star_visibility: 1.0,
            sun_altitude_deg: -90.0,
        }
    }
}
