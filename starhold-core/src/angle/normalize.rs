//! Angle normalization for the coordinate ranges this workspace documents.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, azimuth | [0, 2pi) | [`wrap_0_2pi`] |
//! | Hour angle, longitude offsets | [-pi, +pi) | [`wrap_pm_pi`] |
//! | Declination, altitude, latitude | [-pi/2, +pi/2] | [`clamp_dec`] |
//!
//! Wrapping preserves direction on the sphere (370° is the same direction
//! as 10°); clamping enforces a physical limit (you cannot go past a pole).
//!
//! All three functions are total: non-finite input passes through unchanged
//! rather than being masked here. The renderer is the designated checkpoint
//! for finiteness, and hiding a NaN inside a normalizer would let corrupted
//! state survive undetected.
//!
//! Uses `libm::fmod` via [`crate::math::fmod`] because Rust's `%` on floats
//! is a remainder that keeps the dividend's sign.

use crate::constants::{HALF_PI, PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle in radians to [0, 2pi).
///
/// Use for right ascension and azimuth, where negative values make no sense.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

/// Wraps an angle in radians to [-pi, +pi).
///
/// Use for hour angles and longitude differences, where the discontinuity
/// belongs at the anti-meridian rather than at zero.
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let w = fmod(x + PI, TWOPI);
    if w < 0.0 {
        w + PI
    } else {
        w - PI
    }
}

/// Wraps an angle in degrees to [0, 360).
///
/// Degree-domain twin of [`wrap_0_2pi`] for the formulas that work in
/// degrees end to end (sidereal time, the coordinate generator).
#[inline]
pub fn wrap_0_360(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let w = fmod(x, 360.0);
    if w < 0.0 {
        w + 360.0
    } else {
        w
    }
}

/// Clamps an angle in radians to [-pi/2, +pi/2].
///
/// Use for declination, altitude, and latitude. NaN passes through.
#[inline]
pub fn clamp_dec(x: f64) -> f64 {
    x.clamp(-HALF_PI, HALF_PI)
}
