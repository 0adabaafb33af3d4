//! The coordinate derivation itself.

use starhold_astro::{EquatorialCoord, Instant};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::constellations::CONSTELLATIONS;
use crate::hash::{fnv1a, splitmix64, unit_interval};

/// Joins the seed fields. An ASCII unit separator cannot appear in a
/// message without also shifting every later field, so distinct input
/// tuples cannot collide by concatenation alone.
const FIELD_SEPARATOR: u8 = 0x1f;

/// A deterministically assigned celestial address.
///
/// Serialize-only under the `serde` feature: the constellation label is a
/// borrowed entry of the fixed table, so addresses are re-derived, never
/// deserialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MemoryCoordinate {
    /// Right ascension in degrees, [0, 360).
    pub ra: f64,
    /// Declination in degrees, [-90, 90].
    pub dec: f64,
    /// Label from [`CONSTELLATIONS`].
    pub constellation: &'static str,
}

impl MemoryCoordinate {
    /// The address as an [`EquatorialCoord`] for plotting.
    pub fn equatorial(&self) -> EquatorialCoord {
        EquatorialCoord::from_degrees(self.ra, self.dec)
    }
}

/// Derives the celestial address for a memory.
///
/// The derivation, frozen:
///
/// 1. Seed = FNV-1a 64 over `message 1F unix_millis(unlock) 1F recipient 1F
///    owner_id-or-empty` (unit-separator-joined UTF-8 bytes; the unlock
///    instant contributes its decimal epoch-millisecond string).
/// 2. Three successive SplitMix64 outputs `s1, s2, s3` seeded by the hash.
/// 3. `ra = u(s1) · 360` and `dec = asin(2·u(s2) − 1)` in degrees, where
///    `u` maps a draw to [0, 1). The arcsine transform makes addresses
///    uniform on the sphere rather than uniform in declination; without it
///    the poles would visibly over-collect markers.
/// 4. `constellation = CONSTELLATIONS[s3 mod 12]`.
///
/// Pure and total: empty strings and past unlock dates are valid inputs,
/// and the output is always finite and in range. Whether the memory is
/// still locked is its caller's concern, not this function's.
pub fn generate_coordinates(
    message: &str,
    unlock: &Instant,
    recipient_name: &str,
    owner_id: Option<&str>,
) -> MemoryCoordinate {
    let mut seed_bytes = Vec::with_capacity(
        message.len() + recipient_name.len() + owner_id.map_or(0, str::len) + 32,
    );
    seed_bytes.extend_from_slice(message.as_bytes());
    seed_bytes.push(FIELD_SEPARATOR);
    seed_bytes.extend_from_slice(unlock.unix_millis().to_string().as_bytes());
    seed_bytes.push(FIELD_SEPARATOR);
    seed_bytes.extend_from_slice(recipient_name.as_bytes());
    seed_bytes.push(FIELD_SEPARATOR);
    seed_bytes.extend_from_slice(owner_id.unwrap_or("").as_bytes());

    let seed = fnv1a(&seed_bytes);
    let s1 = splitmix64(seed);
    let s2 = splitmix64(s1);
    let s3 = splitmix64(s2);

    let ra = unit_interval(s1) * 360.0;
    let dec = (2.0 * unit_interval(s2) - 1.0).asin().to_degrees();
    let constellation = CONSTELLATIONS[(s3 % CONSTELLATIONS.len() as u64) as usize];

    MemoryCoordinate {
        ra,
        dec,
        constellation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unlock_2030() -> Instant {
        Instant::from_utc(2030, 6, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn deterministic_across_calls() {
        let unlock = unlock_2030();
        let a = generate_coordinates("happy birthday", &unlock, "Ada", Some("user-42"));
        let b = generate_coordinates("happy birthday", &unlock, "Ada", Some("user-42"));
        assert_eq!(a, b);
        // Bit-identical, not just approximately equal.
        assert_eq!(a.ra.to_bits(), b.ra.to_bits());
        assert_eq!(a.dec.to_bits(), b.dec.to_bits());
    }

    #[test]
    fn pinned_regression_fixtures() {
        // These values are the compatibility contract. If this test fails,
        // every previously assigned star has moved. Do not update the
        // expectations; fix the regression.
        let unlock = unlock_2030();

        let c = generate_coordinates("happy birthday", &unlock, "Ada", Some("user-42"));
        assert_abs_diff_eq!(c.ra, 316.7927961218653, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dec, 60.2315406847091, epsilon = 1e-12);
        assert_eq!(c.constellation, "Scorpius");

        let c = generate_coordinates("happy birthday", &unlock, "Ada", None);
        assert_abs_diff_eq!(c.ra, 306.90057063103205, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dec, 51.66991422061947, epsilon = 1e-12);
        assert_eq!(c.constellation, "Centaurus");
    }

    #[test]
    fn empty_inputs_still_valid() {
        let unlock = Instant::from_utc(2001, 1, 1, 0, 0, 0).unwrap();
        let c = generate_coordinates("", &unlock, "", None);
        assert_abs_diff_eq!(c.ra, 298.8648902011891, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dec, -56.3698354079899, epsilon = 1e-12);
        assert_eq!(c.constellation, "Aquila");
    }

    #[test]
    fn past_dates_accepted() {
        let past = Instant::from_utc(1969, 7, 20, 20, 17, 0).unwrap();
        let c = generate_coordinates("one small step", &past, "Neil", None);
        assert!((0.0..360.0).contains(&c.ra));
        assert!((-90.0..=90.0).contains(&c.dec));
    }

    #[test]
    fn each_input_field_matters() {
        let unlock = unlock_2030();
        let base = generate_coordinates("msg", &unlock, "R", Some("o"));
        assert_ne!(base, generate_coordinates("msg2", &unlock, "R", Some("o")));
        assert_ne!(base, generate_coordinates("msg", &unlock, "R2", Some("o")));
        assert_ne!(base, generate_coordinates("msg", &unlock, "R", Some("o2")));
        assert_ne!(base, generate_coordinates("msg", &unlock, "R", None));

        let other_unlock = Instant::from_utc(2030, 6, 15, 0, 0, 1).unwrap();
        assert_ne!(base, generate_coordinates("msg", &other_unlock, "R", Some("o")));
    }

    #[test]
    fn outputs_in_documented_ranges() {
        let unlock = unlock_2030();
        for i in 0..500 {
            let c = generate_coordinates(&format!("memory-{}", i), &unlock, "Recipient", None);
            assert!((0.0..360.0).contains(&c.ra), "ra {} out of range", c.ra);
            assert!((-90.0..=90.0).contains(&c.dec), "dec {} out of range", c.dec);
            assert!(CONSTELLATIONS.contains(&c.constellation));
        }
    }

    #[test]
    fn declination_uniform_on_sphere() {
        // sin(dec) uniform in [-1, 1] means half of all addresses land
        // within 30° of the equator and the mean |dec| is pi/2 - 1 rad
        // (~32.70°). Uniform-in-angle would put only a third below 30° and
        // the mean at 45°.
        let unlock = unlock_2030();
        let decs: Vec<f64> = (0..2000)
            .map(|i| {
                generate_coordinates(&format!("memory-{}", i), &unlock, "Recipient", None).dec
            })
            .collect();

        let below_30 = decs.iter().filter(|d| d.abs() < 30.0).count() as f64 / 2000.0;
        assert!(
            (0.45..=0.55).contains(&below_30),
            "fraction below 30°: {}",
            below_30
        );

        let mean_abs = decs.iter().map(|d| d.abs()).sum::<f64>() / 2000.0;
        let expected = 90.0 - 1f64.to_degrees(); // pi/2 - 1 rad in degrees
        assert!(
            (mean_abs - expected).abs() < 1.5,
            "mean |dec| {} vs expected {}",
            mean_abs,
            expected
        );
    }

    #[test]
    fn equatorial_view_matches_raw_fields() {
        let unlock = unlock_2030();
        let c = generate_coordinates("hello", &unlock, "World", None);
        let eq = c.equatorial();
        assert_abs_diff_eq!(eq.ra().degrees(), c.ra, epsilon = 1e-9);
        assert_abs_diff_eq!(eq.dec().degrees(), c.dec, epsilon = 1e-9);
    }
}
