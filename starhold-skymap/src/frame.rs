//! Display-frame adapters for the two observer modes.
//!
//! Catalog data is stored once, in equatorial coordinates. What the
//! projection consumes depends on the observer mode:
//!
//! - **Polar**: the display frame *is* the equatorial frame. Rotation
//!   state tracks `[-RA, -Dec]` of the view center directly and the grid on
//!   screen is RA/Dec.
//! - **Pan**: the display frame is the observer's horizon (Alt/Az). The
//!   grid on screen is horizon-relative and time-varying: as sidereal time
//!   advances, the same star drifts through the display frame even though
//!   its equatorial position never changes.
//!
//! The conversion is this explicit adapter pair rather than inline
//! per-call-site math so the frame boundary is discoverable and testable
//! on its own.

use starhold_astro::{EquatorialCoord, HorizontalCoord, ObserverContext};
use starhold_core::angle::wrap_0_360;

use crate::projection::SpherePoint;

/// How the view is referenced to the sky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObserverMode {
    /// Equatorial-referenced: the rotation state directly tracks RA/Dec.
    #[default]
    Polar,
    /// Horizon-referenced: the display frame is Alt/Az for the observer.
    Pan,
}

/// The equatorial ⇄ display-frame boundary for one frame's rendering.
#[derive(Debug, Clone, Copy)]
pub struct DisplayFrame<'a> {
    mode: ObserverMode,
    observer: Option<&'a ObserverContext>,
}

impl<'a> DisplayFrame<'a> {
    /// Builds the adapter. Pan mode without an observer context cannot
    /// orient a horizon, so it degrades to polar: documented, not an
    /// error, matching the zenith-default policy of the transforms.
    pub fn new(mode: ObserverMode, observer: Option<&'a ObserverContext>) -> Self {
        let mode = match (mode, observer) {
            (ObserverMode::Pan, None) => ObserverMode::Polar,
            (mode, _) => mode,
        };
        Self { mode, observer }
    }

    /// The effective mode after degradation.
    pub fn mode(&self) -> ObserverMode {
        self.mode
    }

    /// Maps an equatorial position into the display frame.
    ///
    /// Pan mode plots azimuth as display longitude mirrored (`-az`), so
    /// east appears on the left, the sky seen from inside the sphere.
    pub fn to_display_frame(&self, eq: &EquatorialCoord) -> SpherePoint {
        match self.mode {
            ObserverMode::Polar => SpherePoint::from_equatorial(eq),
            ObserverMode::Pan => {
                let hz = eq.to_horizontal(self.observer);
                SpherePoint::from_degrees(-hz.azimuth().degrees(), hz.altitude().degrees())
            }
        }
    }

    /// Maps a display-frame point back to the equatorial frame, the exact
    /// inverse of [`to_display_frame`](Self::to_display_frame).
    pub fn from_display_frame(&self, p: SpherePoint) -> EquatorialCoord {
        match (self.mode, self.observer) {
            (ObserverMode::Polar, _) | (ObserverMode::Pan, None) => p.to_equatorial(),
            (ObserverMode::Pan, Some(obs)) => {
                let az = wrap_0_360(-p.lambda.to_degrees());
                let alt = p.phi.to_degrees();
                HorizontalCoord::from_degrees(az, alt).to_equatorial(obs)
            }
        }
    }

    /// The `[yaw, pitch, roll]` rotation that centers the given equatorial
    /// position in this display frame; this is what click-to-center feeds to
    /// [`ViewState::set_target_rotation`](crate::ViewState::set_target_rotation).
    pub fn center_rotation(&self, eq: &EquatorialCoord) -> [f64; 3] {
        let p = self.to_display_frame(eq);
        [-p.lambda.to_degrees(), -p.phi.to_degrees(), 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use starhold_astro::Instant;
    use starhold_core::Location;

    fn observer() -> ObserverContext {
        ObserverContext::new(
            Location::from_degrees(51.4769, 0.0).unwrap(),
            Instant::j2000(),
        )
    }

    #[test]
    fn polar_mode_passes_equatorial_through() {
        let frame = DisplayFrame::new(ObserverMode::Polar, None);
        let eq = EquatorialCoord::from_degrees(123.0, -45.0);
        let p = frame.to_display_frame(&eq);
        assert_abs_diff_eq!(p.lambda.to_degrees(), 123.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.phi.to_degrees(), -45.0, epsilon = 1e-9);

        let back = frame.from_display_frame(p);
        assert_abs_diff_eq!(back.ra().degrees(), 123.0, epsilon = 1e-9);
    }

    #[test]
    fn pan_mode_round_trips_through_horizon() {
        let obs = observer();
        let frame = DisplayFrame::new(ObserverMode::Pan, Some(&obs));
        assert_eq!(frame.mode(), ObserverMode::Pan);

        for (ra, dec) in [(0.0, 0.0), (150.0, 40.0), (280.5, -20.25)] {
            let eq = EquatorialCoord::from_degrees(ra, dec);
            let back = frame.from_display_frame(frame.to_display_frame(&eq));
            assert!(
                eq.separation(&back).degrees() < 1e-6,
                "drift at ra={} dec={}",
                ra,
                dec
            );
        }
    }

    #[test]
    fn pan_without_observer_degrades_to_polar() {
        let frame = DisplayFrame::new(ObserverMode::Pan, None);
        assert_eq!(frame.mode(), ObserverMode::Polar);

        let eq = EquatorialCoord::from_degrees(10.0, 10.0);
        let p = frame.to_display_frame(&eq);
        assert_abs_diff_eq!(p.phi.to_degrees(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn pan_frame_tracks_sidereal_time() {
        // The same star maps to different display points an hour apart.
        let obs_a = observer();
        let obs_b = ObserverContext::new(
            obs_a.location,
            Instant::from_utc(2000, 1, 1, 13, 0, 0).unwrap(),
        );
        let eq = EquatorialCoord::from_degrees(30.0, 20.0);

        let pa = DisplayFrame::new(ObserverMode::Pan, Some(&obs_a)).to_display_frame(&eq);
        let pb = DisplayFrame::new(ObserverMode::Pan, Some(&obs_b)).to_display_frame(&eq);
        let moved = (pa.lambda - pb.lambda).abs() + (pa.phi - pb.phi).abs();
        assert!(moved > 0.01, "display frame did not advance with time");

        // While polar mode is time-invariant.
        let qa = DisplayFrame::new(ObserverMode::Polar, Some(&obs_a)).to_display_frame(&eq);
        let qb = DisplayFrame::new(ObserverMode::Polar, Some(&obs_b)).to_display_frame(&eq);
        assert_abs_diff_eq!(qa.lambda, qb.lambda, epsilon = 1e-12);
    }

    #[test]
    fn center_rotation_negates_display_coords() {
        let frame = DisplayFrame::new(ObserverMode::Polar, None);
        let eq = EquatorialCoord::from_degrees(120.0, 45.0);
        let rotation = frame.center_rotation(&eq);
        assert_abs_diff_eq!(rotation[0], -120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rotation[1], -45.0, epsilon = 1e-9);
        assert_eq!(rotation[2], 0.0);
    }
}
