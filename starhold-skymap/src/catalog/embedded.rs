//! Built-in default catalog.
//!
//! A hand-curated slice of the sky that keeps the view usable with no
//! external data: the brightest stars (J2000 positions), a few instantly
//! recognizable constellation figures, and a coarse Milky Way band traced
//! at ±12° galactic latitude.

use starhold_astro::EquatorialCoord;

use super::objects::{ConstellationLines, MilkyWayOutline, Star};
use super::SkyCatalog;

/// (name, designation, constellation, ra°, dec°, magnitude)
const BRIGHT_STARS: &[(&str, &str, &str, f64, f64, f64)] = &[
    ("Sirius", "α CMa", "Canis Major", 101.2875, -16.7161, -1.46),
    ("Canopus", "α Car", "Carina", 95.9879, -52.6957, -0.74),
    ("Rigil Kentaurus", "α Cen", "Centaurus", 219.9021, -60.8340, -0.27),
    ("Arcturus", "α Boo", "Boötes", 213.9154, 19.1824, -0.05),
    ("Vega", "α Lyr", "Lyra", 279.2347, 38.7837, 0.03),
    ("Capella", "α Aur", "Auriga", 79.1723, 45.9980, 0.08),
    ("Rigel", "β Ori", "Orion", 78.6345, -8.2016, 0.13),
    ("Procyon", "α CMi", "Canis Minor", 114.8255, 5.2250, 0.34),
    ("Achernar", "α Eri", "Eridanus", 24.4285, -57.2368, 0.46),
    ("Betelgeuse", "α Ori", "Orion", 88.7929, 7.4071, 0.50),
    ("Hadar", "β Cen", "Centaurus", 210.9559, -60.3730, 0.61),
    ("Altair", "α Aql", "Aquila", 297.6959, 8.8683, 0.76),
    ("Acrux", "α Cru", "Crux", 186.6496, -63.0991, 0.76),
    ("Aldebaran", "α Tau", "Taurus", 68.9802, 16.5093, 0.86),
    ("Antares", "α Sco", "Scorpius", 247.3519, -26.4320, 0.96),
    ("Spica", "α Vir", "Virgo", 201.2983, -11.1613, 0.97),
    ("Pollux", "β Gem", "Gemini", 116.3290, 28.0262, 1.14),
    ("Fomalhaut", "α PsA", "Piscis Austrinus", 344.4127, -29.6222, 1.16),
    ("Deneb", "α Cyg", "Cygnus", 310.3580, 45.2803, 1.25),
    ("Mimosa", "β Cru", "Crux", 191.9303, -59.6888, 1.25),
    ("Regulus", "α Leo", "Leo", 152.0929, 11.9672, 1.35),
    ("Adhara", "ε CMa", "Canis Major", 104.6565, -28.9721, 1.50),
    ("Castor", "α Gem", "Gemini", 113.6494, 31.8883, 1.58),
    ("Gacrux", "γ Cru", "Crux", 187.7915, -57.1133, 1.63),
    ("Shaula", "λ Sco", "Scorpius", 263.4022, -37.1038, 1.62),
    ("Bellatrix", "γ Ori", "Orion", 81.2828, 6.3497, 1.64),
    ("Alnilam", "ε Ori", "Orion", 84.0534, -1.2019, 1.69),
    ("Alnitak", "ζ Ori", "Orion", 85.1897, -1.9426, 1.77),
    ("Alioth", "ε UMa", "Ursa Major", 193.5073, 55.9598, 1.77),
    ("Dubhe", "α UMa", "Ursa Major", 165.9320, 61.7510, 1.79),
    ("Alkaid", "η UMa", "Ursa Major", 206.8852, 49.3133, 1.86),
    ("Polaris", "α UMi", "Ursa Minor", 37.9546, 89.2641, 1.98),
    ("Mizar", "ζ UMa", "Ursa Major", 200.9814, 54.9254, 2.04),
    ("Saiph", "κ Ori", "Orion", 86.9391, -9.6696, 2.09),
    ("Sadr", "γ Cyg", "Cygnus", 305.5571, 40.2567, 2.23),
    ("Mintaka", "δ Ori", "Orion", 83.0016, -0.2991, 2.23),
    ("Schedar", "α Cas", "Cassiopeia", 10.1268, 56.5373, 2.24),
    ("Caph", "β Cas", "Cassiopeia", 2.2945, 59.1498, 2.27),
    ("Merak", "β UMa", "Ursa Major", 165.4603, 56.3824, 2.37),
    ("Phecda", "γ UMa", "Ursa Major", 178.4577, 53.6948, 2.44),
    ("Tsih", "γ Cas", "Cassiopeia", 14.1772, 60.7167, 2.47),
    ("Gienah", "ε Cyg", "Cygnus", 311.5528, 33.9703, 2.48),
    ("Ruchbah", "δ Cas", "Cassiopeia", 21.4538, 60.2353, 2.68),
    ("Imai", "δ Cru", "Crux", 183.7863, -58.7489, 2.79),
    ("Albireo", "β Cyg", "Cygnus", 292.6804, 27.9597, 3.18),
    ("Megrez", "δ UMa", "Ursa Major", 183.8565, 57.0326, 3.31),
    ("Segin", "ε Cas", "Cassiopeia", 28.5988, 63.6701, 3.38),
];

/// (constellation name, line strings of (ra°, dec°) vertices)
const FIGURES: &[(&str, &[&[(f64, f64)]])] = &[
    (
        "Orion",
        &[
            // Belt
            &[(83.0016, -0.2991), (84.0534, -1.2019), (85.1897, -1.9426)],
            // Shoulders and frame
            &[(88.7929, 7.4071), (81.2828, 6.3497)],
            &[(88.7929, 7.4071), (85.1897, -1.9426)],
            &[(81.2828, 6.3497), (83.0016, -0.2991)],
            &[(85.1897, -1.9426), (86.9391, -9.6696)],
            &[(83.0016, -0.2991), (78.6345, -8.2016)],
        ],
    ),
    (
        "Ursa Major",
        &[&[
            (206.8852, 49.3133),
            (200.9814, 54.9254),
            (193.5073, 55.9598),
            (183.8565, 57.0326),
            (178.4577, 53.6948),
            (165.4603, 56.3824),
            (165.9320, 61.7510),
            (183.8565, 57.0326),
        ]],
    ),
    (
        "Cassiopeia",
        &[&[
            (2.2945, 59.1498),
            (10.1268, 56.5373),
            (14.1772, 60.7167),
            (21.4538, 60.2353),
            (28.5988, 63.6701),
        ]],
    ),
    (
        "Crux",
        &[
            &[(186.6496, -63.0991), (187.7915, -57.1133)],
            &[(191.9303, -59.6888), (183.7863, -58.7489)],
        ],
    ),
    (
        "Cygnus",
        &[
            &[
                (310.3580, 45.2803),
                (305.5571, 40.2567),
                (292.6804, 27.9597),
            ],
            &[(311.5528, 33.9703), (305.5571, 40.2567), (296.2439, 45.1309)],
        ],
    ),
];

/// The Milky Way band: one closed ring tracing ±12° galactic latitude,
/// coarse on purpose, since it renders as a translucent wash.
const MILKY_WAY_RING: &[(f64, f64)] = &[
    (255.35, -22.24),
    (268.12, -2.31),
    (278.68, 18.73),
    (290.07, 40.05),
    (308.5, 60.57),
    (1.98, 74.62),
    (69.54, 65.11),
    (92.23, 45.21),
    (104.47, 23.94),
    (114.93, 2.76),
    (126.87, -17.54),
    (143.74, -35.62),
    (170.61, -48.27),
    (206.71, -49.89),
    (236.54, -39.4),
    (263.38, -55.52),
    (223.97, -72.64),
    (147.16, -69.38),
    (117.62, -50.53),
    (104.04, -29.4),
    (93.49, -8.13),
    (82.21, 12.49),
    (67.03, 31.33),
    (43.18, 45.85),
    (8.32, 50.77),
    (335.61, 42.95),
    (314.4, 26.99),
    (300.53, 7.56),
    (289.69, -13.3),
    (278.86, -34.62),
    (255.35, -22.24),
];

pub(super) fn build() -> SkyCatalog {
    let mut stars: Vec<Star> = BRIGHT_STARS
        .iter()
        .map(|&(name, desig, con, ra, dec, mag)| Star {
            position: EquatorialCoord::from_degrees(ra, dec),
            magnitude: mag,
            name: Some(name.to_string()),
            designation: Some(desig.to_string()),
            constellation: Some(con.to_string()),
        })
        .collect();
    stars.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));

    let constellations = FIGURES
        .iter()
        .map(|&(name, lines)| ConstellationLines {
            name: name.to_string(),
            lines: lines
                .iter()
                .map(|line| {
                    line.iter()
                        .map(|&(ra, dec)| EquatorialCoord::from_degrees(ra, dec))
                        .collect()
                })
                .collect(),
        })
        .collect();

    let milky_way = MilkyWayOutline {
        rings: vec![MILKY_WAY_RING
            .iter()
            .map(|&(ra, dec)| EquatorialCoord::from_degrees(ra, dec))
            .collect()],
    };

    SkyCatalog {
        stars,
        constellations,
        milky_way,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_embedded_positions_valid() {
        let catalog = build();
        for star in &catalog.stars {
            let ra = star.position.ra().degrees();
            let dec = star.position.dec().degrees();
            assert!((0.0..360.0).contains(&ra));
            assert!((-90.0..=90.0).contains(&dec));
            assert!(star.magnitude.is_finite());
        }
    }

    #[test]
    fn figures_reference_plausible_sky() {
        let catalog = build();
        let orion = catalog
            .constellations
            .iter()
            .find(|c| c.name == "Orion")
            .unwrap();
        // The belt is a 3-vertex line string.
        assert!(orion.lines.iter().any(|l| l.len() == 3));
    }

    #[test]
    fn milky_way_ring_is_closed() {
        let catalog = build();
        let ring = &catalog.milky_way.rings[0];
        let first = ring.first().unwrap();
        let last = ring.last().unwrap();
        assert!((first.ra().degrees() - last.ra().degrees()).abs() < 1e-9);
        assert!((first.dec().degrees() - last.dec().degrees()).abs() < 1e-9);
    }
}
