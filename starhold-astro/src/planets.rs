//! Simplified Keplerian positions for the naked-eye planets.
//!
//! Heliocentric longitude from mean elements plus the first elliptic
//! correction term, projected onto the ecliptic and rotated to equatorial.
//! Good to a few degrees: these are markers on a sky view, not an
//! ephemeris service.

use starhold_core::angle::wrap_0_360;

use crate::frames::EquatorialCoord;
use crate::instant::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five planets bright enough to plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    /// All supported planets, brightest-first is not implied.
    pub const ALL: [Planet; 5] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
        }
    }

    fn elements(&self) -> &'static PlanetElements {
        match self {
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean orbital elements at J2000: eccentricity, mean longitude,
/// longitude of perihelion, and daily motion, degrees where angular.
struct PlanetElements {
    e: f64,
    l0: f64,
    peri: f64,
    daily_motion: f64,
}

const MERCURY: PlanetElements = PlanetElements {
    e: 0.205_630,
    l0: 252.2503,
    peri: 77.4577,
    daily_motion: 4.092_33,
};
const VENUS: PlanetElements = PlanetElements {
    e: 0.006_773,
    l0: 181.9791,
    peri: 131.5637,
    daily_motion: 1.602_13,
};
const MARS: PlanetElements = PlanetElements {
    e: 0.093_412,
    l0: 355.4533,
    peri: 336.0408,
    daily_motion: 0.524_02,
};
const JUPITER: PlanetElements = PlanetElements {
    e: 0.048_393,
    l0: 34.4044,
    peri: 14.7539,
    daily_motion: 0.083_08,
};
const SATURN: PlanetElements = PlanetElements {
    e: 0.054_151,
    l0: 49.9443,
    peri: 92.4319,
    daily_motion: 0.033_46,
};

/// Approximate equatorial position of a planet at the given instant.
pub fn planet_position(planet: Planet, instant: &Instant) -> EquatorialCoord {
    let p = planet.elements();
    let d = instant.days_since_j2000();

    let mean_anomaly = wrap_0_360(p.l0 - p.peri + p.daily_motion * d).to_radians();
    let lambda = wrap_0_360(
        p.l0 + p.daily_motion * d + 2.0 * p.e * mean_anomaly.sin().to_degrees(),
    )
    .to_radians();

    let epsilon = 23.439_f64.to_radians();
    let ra = (epsilon.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (epsilon.sin() * lambda.sin()).asin();

    EquatorialCoord::from_degrees(wrap_0_360(ra.to_degrees()), dec.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_finite_and_in_range() {
        let t = Instant::from_utc(2026, 8, 1, 0, 0, 0).unwrap();
        for planet in Planet::ALL {
            let pos = planet_position(planet, &t);
            let ra = pos.ra().degrees();
            let dec = pos.dec().degrees();
            assert!((0.0..360.0).contains(&ra), "{} ra {}", planet, ra);
            // Ecliptic-plane model: |dec| bounded by the obliquity.
            assert!(dec.abs() <= 23.5, "{} dec {}", planet, dec);
        }
    }

    #[test]
    fn inner_planets_move_faster() {
        let t0 = Instant::j2000();
        let t1 = Instant::from_utc(2000, 2, 1, 12, 0, 0).unwrap();
        let mercury_arc = planet_position(Planet::Mercury, &t0)
            .separation(&planet_position(Planet::Mercury, &t1))
            .degrees();
        let saturn_arc = planet_position(Planet::Saturn, &t0)
            .separation(&planet_position(Planet::Saturn, &t1))
            .degrees();
        assert!(mercury_arc > saturn_arc);
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Planet::Mars.name(), "Mars");
        assert_eq!(format!("{}", Planet::Jupiter), "Jupiter");
        assert_eq!(Planet::ALL.len(), 5);
    }
}
