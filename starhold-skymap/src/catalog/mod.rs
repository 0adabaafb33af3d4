//! The celestial catalog: stars, constellation figures, the Milky Way
//! outline, and externally persisted memory records.
//!
//! Catalog data is loaded once and read-only for the lifetime of the view.
//! Each section loads independently and degrades to empty on bad data;
//! a corrupt constellation file must not take the stars down with it.

mod embedded;
mod objects;
mod parse;

pub use objects::{ConstellationLines, MemoryRecord, MilkyWayOutline, Star, StarCoordinates};
pub use parse::parse_memory_records;

use crate::errors::SkymapResult;

/// The full static catalog a sky view renders.
#[derive(Debug, Clone, Default)]
pub struct SkyCatalog {
    pub stars: Vec<Star>,
    pub constellations: Vec<ConstellationLines>,
    pub milky_way: MilkyWayOutline,
}

impl SkyCatalog {
    /// The built-in catalog: the brightest naked-eye stars, a handful of
    /// well-known constellation figures, and a coarse Milky Way band.
    /// Always available, no I/O.
    pub fn embedded() -> Self {
        embedded::build()
    }

    /// Loads a catalog from the JSON documents the data pipeline produces:
    /// a GeoJSON star collection, a star-name map keyed by catalog id,
    /// constellation line features, and Milky Way polygons.
    ///
    /// Total: each section that is missing (`None`) or malformed degrades
    /// to an empty collection with a logged warning. An entirely broken
    /// input set yields an empty, but usable, catalog.
    pub fn from_json(
        stars_json: Option<&str>,
        star_names_json: Option<&str>,
        constellations_json: Option<&str>,
        milky_way_json: Option<&str>,
    ) -> Self {
        let stars = Self::section("stars", || parse::parse_stars(stars_json, star_names_json));
        let constellations = Self::section("constellations", || {
            parse::parse_constellations(constellations_json)
        });
        let milky_way = Self::section("milky-way", || parse::parse_milky_way(milky_way_json));

        Self {
            stars,
            constellations,
            milky_way,
        }
    }

    fn section<T: Default>(name: &str, load: impl FnOnce() -> SkymapResult<T>) -> T {
        match load() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("catalog: {} section degraded to empty: {}", name, err);
                T::default()
            }
        }
    }

    /// Named stars, in catalog (brightness) order.
    pub fn named_stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter().filter(|s| s.name.is_some())
    }
}
