//! Angular measurement, normalization, and formatting.

mod core;
mod format;
mod normalize;
mod ops;

pub use self::core::Angle;
pub use format::{format_dec_dms, format_ra_hms};
pub use normalize::{clamp_dec, wrap_0_2pi, wrap_0_360, wrap_pm_pi};
