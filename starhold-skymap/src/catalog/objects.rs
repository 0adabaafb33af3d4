//! Catalog value types.

use serde::Deserialize;
use starhold_astro::EquatorialCoord;

/// A catalog star with display metadata.
#[derive(Debug, Clone)]
pub struct Star {
    pub position: EquatorialCoord,
    /// Apparent visual magnitude; smaller is brighter.
    pub magnitude: f64,
    /// Proper name, when the star has one (Sirius, Vega, ...).
    pub name: Option<String>,
    /// Bayer or catalog designation (e.g. "α CMa").
    pub designation: Option<String>,
    /// Host constellation's full name.
    pub constellation: Option<String>,
}

impl Star {
    /// Dot radius in pixels at unit zoom, from magnitude.
    pub fn draw_radius(&self) -> f64 {
        (2.5 - self.magnitude * 0.3).max(0.3)
    }

    /// Base opacity from magnitude, before day/night shading.
    pub fn base_alpha(&self) -> f64 {
        (1.2 - self.magnitude * 0.15).clamp(0.0, 1.0)
    }
}

/// A named constellation figure: groups of line strings in RA/Dec space.
#[derive(Debug, Clone)]
pub struct ConstellationLines {
    pub name: String,
    pub lines: Vec<Vec<EquatorialCoord>>,
}

/// The Milky Way outline: closed polygon rings in RA/Dec space.
#[derive(Debug, Clone, Default)]
pub struct MilkyWayOutline {
    pub rings: Vec<Vec<EquatorialCoord>>,
}

/// An externally persisted memory, as handed to the renderer.
///
/// Only `star_coordinates` is interpreted here; the unlock timestamp rides
/// along for the detail-display collaborator and the lock state is none of
/// this crate's business.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryRecord {
    #[serde(default)]
    pub star_coordinates: Option<StarCoordinates>,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub unlock_at: Option<String>,
}

/// The raw `{ra, dec}` pair a memory record carries.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StarCoordinates {
    pub ra: f64,
    pub dec: f64,
}

impl MemoryRecord {
    /// The plottable position, if the record carries finite coordinates.
    pub fn position(&self) -> Option<EquatorialCoord> {
        let coords = self.star_coordinates?;
        if !coords.ra.is_finite() || !coords.dec.is_finite() {
            return None;
        }
        Some(EquatorialCoord::from_degrees(coords.ra, coords.dec))
    }
}
