//! Display-grade astronomical math for the Starhold celestial engine.
//!
//! Stateless conversions between time and coordinate representations:
//! sidereal time, equatorial ⇄ horizontal transforms, a low-precision
//! solar/lunar/planetary ephemeris, and the parallactic angle. Everything
//! here is a pure function of its arguments: no I/O, no clocks, no caches.
//!
//! # Accuracy
//!
//! All coordinates are treated as fixed J2000: no precession, nutation, or
//! polar-motion corrections are applied, and the solar-system models are
//! truncated series good to a fraction of a degree. That is the right
//! trade-off for plotting a sky view; it is nowhere near navigation grade.
//! Do not reuse this crate where real astrometric accuracy is implied.
//!
//! # Totality
//!
//! The transform functions never panic and never return an error: out-of-range
//! angles are normalized, a missing observer selects the documented zenith
//! fallback, and non-finite intermediate results collapse to that same
//! fallback instead of letting NaN propagate downstream.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`instant`] | [`Instant`] — UTC instant and Julian date |
//! | [`sidereal`] | [`gmst`], [`local_sidereal_time`] |
//! | [`frames`] | [`EquatorialCoord`], [`HorizontalCoord`], transforms, parallactic angle |
//! | [`observer`] | [`ObserverContext`] — location + instant pair |
//! | [`solar`] | [`sun_position`], [`TwilightPhase`], [`star_visibility`] |
//! | [`lunar`] | [`moon_position`] |
//! | [`planets`] | [`Planet`], [`planet_position`] |

pub mod errors;
pub mod frames;
pub mod instant;
pub mod lunar;
pub mod observer;
pub mod planets;
pub mod sidereal;
pub mod solar;

pub use errors::{AstroError, AstroResult};
pub use frames::{EquatorialCoord, HorizontalCoord};
pub use instant::Instant;
pub use lunar::moon_position;
pub use observer::ObserverContext;
pub use planets::{planet_position, Planet};
pub use sidereal::{gmst, local_sidereal_time};
pub use solar::{star_visibility, sun_position, TwilightPhase};

pub use starhold_core::{Angle, Location};
