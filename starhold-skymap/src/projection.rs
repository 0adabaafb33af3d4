//! Stereographic sky projection with a three-axis view rotation.
//!
//! The pipeline is: spherical position → view rotation (yaw, pitch, roll
//! Euler composition) → azimuthal stereographic forward → screen scale and
//! translate. [`Projector::project`] returns `None` beyond the clip angle;
//! [`Projector::unproject`] is the exact inverse for on-screen points.
//!
//! The rotation convention matches the classic map-projection form: yaw is
//! applied as a longitude offset first, then the pitch/roll pair as a
//! rigid rotation of the sphere. Centering a target at `(λ, φ)` therefore
//! means rotating by `[−λ, −φ, 0]`, which is exactly what click-to-center
//! feeds in.

use starhold_astro::EquatorialCoord;
use starhold_core::angle::{wrap_0_360, wrap_pm_pi};

/// Default projection scale (pixels per unit of projected length).
pub const DEFAULT_SCALE: f64 = 600.0;

/// Angular radius of the visible cap, degrees. Everything farther from the
/// view center projects to `None`.
pub const CLIP_ANGLE_DEG: f64 = 120.0;

/// Spherical longitude/latitude in radians, the projection's working frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePoint {
    pub lambda: f64,
    pub phi: f64,
}

impl SpherePoint {
    /// From display-frame degrees (longitude in [-180, 180] or [0, 360),
    /// latitude in [-90, 90]).
    pub fn from_degrees(lng: f64, lat: f64) -> Self {
        Self {
            lambda: lng.to_radians(),
            phi: lat.to_radians(),
        }
    }

    /// From an equatorial coordinate: RA becomes longitude (wrapped to the
    /// ±180 convention), declination becomes latitude.
    pub fn from_equatorial(eq: &EquatorialCoord) -> Self {
        Self {
            lambda: wrap_pm_pi(eq.ra().radians()),
            phi: eq.dec().radians(),
        }
    }

    /// Back to an equatorial coordinate.
    pub fn to_equatorial(&self) -> EquatorialCoord {
        EquatorialCoord::from_degrees(wrap_0_360(self.lambda.to_degrees()), self.phi.to_degrees())
    }
}

/// The view rotation, precomputed trig included.
#[derive(Debug, Clone, Copy)]
struct Rotation {
    delta_lambda: f64,
    cos_delta_phi: f64,
    sin_delta_phi: f64,
    cos_delta_gamma: f64,
    sin_delta_gamma: f64,
}

impl Rotation {
    fn new(yaw_deg: f64, pitch_deg: f64, roll_deg: f64) -> Self {
        let (sin_delta_phi, cos_delta_phi) = pitch_deg.to_radians().sin_cos();
        let (sin_delta_gamma, cos_delta_gamma) = roll_deg.to_radians().sin_cos();
        Self {
            delta_lambda: yaw_deg.to_radians(),
            cos_delta_phi,
            sin_delta_phi,
            cos_delta_gamma,
            sin_delta_gamma,
        }
    }

    fn forward(&self, p: SpherePoint) -> SpherePoint {
        let lambda = p.lambda + self.delta_lambda;
        let cos_phi = p.phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = p.phi.sin();
        let k = z * self.cos_delta_phi + x * self.sin_delta_phi;
        SpherePoint {
            lambda: (y * self.cos_delta_gamma - k * self.sin_delta_gamma)
                .atan2(x * self.cos_delta_phi - z * self.sin_delta_phi),
            phi: (k * self.cos_delta_gamma + y * self.sin_delta_gamma)
                .clamp(-1.0, 1.0)
                .asin(),
        }
    }

    fn inverse(&self, p: SpherePoint) -> SpherePoint {
        let cos_phi = p.phi.cos();
        let x = p.lambda.cos() * cos_phi;
        let y = p.lambda.sin() * cos_phi;
        let z = p.phi.sin();
        let k = z * self.cos_delta_gamma - y * self.sin_delta_gamma;
        SpherePoint {
            lambda: (y * self.cos_delta_gamma + z * self.sin_delta_gamma)
                .atan2(x * self.cos_delta_phi + k * self.sin_delta_phi)
                - self.delta_lambda,
            phi: (k * self.cos_delta_phi - x * self.sin_delta_phi)
                .clamp(-1.0, 1.0)
                .asin(),
        }
    }
}

/// A configured projection: rotation, scale, screen center, clip angle.
///
/// Built fresh each frame from the current [`ViewState`](crate::ViewState);
/// construction is a handful of trig calls, so there is nothing worth
/// caching across frames.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    rotation: Rotation,
    scale: f64,
    center_x: f64,
    center_y: f64,
    cos_clip: f64,
}

impl Projector {
    /// Creates a projector for a viewport of the given pixel size.
    ///
    /// `rotation_deg` is `[yaw, pitch, roll]` in degrees. Non-finite
    /// rotation or scale must be healed before this point (the renderer
    /// does); this constructor trusts its inputs.
    pub fn new(rotation_deg: [f64; 3], scale: f64, width: f64, height: f64) -> Self {
        Self {
            rotation: Rotation::new(rotation_deg[0], rotation_deg[1], rotation_deg[2]),
            scale,
            center_x: width / 2.0,
            center_y: height / 2.0,
            cos_clip: CLIP_ANGLE_DEG.to_radians().cos(),
        }
    }

    /// Projects a sphere point to screen pixels, or `None` when it lies
    /// beyond the clip angle from the view center.
    pub fn project(&self, p: SpherePoint) -> Option<[f64; 2]> {
        let r = self.rotation.forward(p);
        let cos_phi = r.phi.cos();
        let cos_c = cos_phi * r.lambda.cos();

        // Angular distance from the view center exceeds the clip cap.
        if cos_c < self.cos_clip {
            return None;
        }

        let k = 1.0 + cos_c;
        if k < 1e-12 {
            return None;
        }
        let x = cos_phi * r.lambda.sin() / k;
        let y = r.phi.sin() / k;

        let sx = self.center_x + self.scale * x;
        let sy = self.center_y - self.scale * y;
        if !sx.is_finite() || !sy.is_finite() {
            return None;
        }
        Some([sx, sy])
    }

    /// Convenience: projects an equatorial coordinate directly.
    pub fn project_equatorial(&self, eq: &EquatorialCoord) -> Option<[f64; 2]> {
        self.project(SpherePoint::from_equatorial(eq))
    }

    /// Inverts a screen position back to the sphere. `None` for points that
    /// cannot originate from the visible cap.
    pub fn unproject(&self, screen: [f64; 2]) -> Option<SpherePoint> {
        let x = (screen[0] - self.center_x) / self.scale;
        let y = (self.center_y - screen[1]) / self.scale;

        let rho = (x * x + y * y).sqrt();
        let rotated = if rho < 1e-15 {
            SpherePoint {
                lambda: 0.0,
                phi: 0.0,
            }
        } else {
            // rho = tan(c / 2) for the stereographic forward above.
            let c = 2.0 * rho.atan();
            let (sin_c, cos_c) = c.sin_cos();
            if cos_c < self.cos_clip {
                return None;
            }
            SpherePoint {
                lambda: (x * sin_c).atan2(rho * cos_c),
                phi: ((y * sin_c / rho).clamp(-1.0, 1.0)).asin(),
            }
        };

        let p = self.rotation.inverse(rotated);
        if !p.lambda.is_finite() || !p.phi.is_finite() {
            return None;
        }
        Some(p)
    }

    /// The projection scale in use.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}
