//! JSON ingestion for the catalog sections.
//!
//! The input shapes mirror what the data pipeline emits: a GeoJSON feature
//! collection of stars keyed by Hipparcos id, a separate name map, IAU
//! constellation line features, and Milky Way polygons. These files are
//! fetched and preprocessed outside the process; a half-written file must
//! degrade, not crash.

use std::collections::HashMap;

use serde::Deserialize;
use starhold_astro::EquatorialCoord;

use super::objects::{ConstellationLines, MemoryRecord, MilkyWayOutline, Star};
use crate::errors::{SkymapError, SkymapResult};

/// Stars fainter than this are dropped at load time unless they carry a
/// name; the view never draws them and hit-testing never probes them.
const UNNAMED_MAG_LIMIT: f64 = 3.5;

#[derive(Deserialize)]
struct FeatureCollection<F> {
    features: Vec<F>,
}

#[derive(Deserialize)]
struct StarFeature {
    id: u64,
    properties: StarProps,
    geometry: PointGeometry,
}

#[derive(Deserialize)]
struct StarProps {
    mag: f64,
}

#[derive(Deserialize)]
struct PointGeometry {
    coordinates: [f64; 2],
}

#[derive(Deserialize)]
struct StarName {
    name: Option<String>,
    #[serde(rename = "desig")]
    designation: Option<String>,
    #[serde(rename = "c")]
    constellation: Option<String>,
}

#[derive(Deserialize)]
struct ConstellationFeature {
    id: String,
    geometry: MultiLineGeometry,
}

#[derive(Deserialize)]
struct MultiLineGeometry {
    coordinates: Vec<Vec<[f64; 2]>>,
}

#[derive(Deserialize)]
struct PolygonFeature {
    geometry: PolygonGeometry,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum PolygonGeometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}

/// Catalog longitudes arrive in [-180, 180] (GeoJSON convention); RA wants
/// [0, 360). `EquatorialCoord::from_degrees` wraps, so the pair maps
/// directly.
fn coord(lng_lat: [f64; 2]) -> EquatorialCoord {
    EquatorialCoord::from_degrees(lng_lat[0], lng_lat[1])
}

pub(super) fn parse_stars(
    stars_json: Option<&str>,
    names_json: Option<&str>,
) -> SkymapResult<Vec<Star>> {
    let Some(stars_json) = stars_json else {
        return Err(SkymapError::catalog_parse("stars", "no data supplied"));
    };

    let collection: FeatureCollection<StarFeature> = serde_json::from_str(stars_json)
        .map_err(|e| SkymapError::catalog_parse("stars", e))?;

    // The name map is optional enrichment; a broken one costs labels, not
    // stars.
    let names: HashMap<String, StarName> = match names_json {
        Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("catalog: star name map unreadable, labels dropped: {}", e);
            HashMap::new()
        }),
        None => HashMap::new(),
    };

    let mut stars: Vec<Star> = collection
        .features
        .into_iter()
        .filter_map(|f| {
            let name_entry = names.get(&f.id.to_string());
            let name = name_entry.and_then(|n| n.name.clone());
            if f.properties.mag >= UNNAMED_MAG_LIMIT && name.is_none() {
                return None;
            }
            if !f.properties.mag.is_finite() {
                return None;
            }
            Some(Star {
                position: coord(f.geometry.coordinates),
                magnitude: f.properties.mag,
                name,
                designation: name_entry.and_then(|n| n.designation.clone()),
                constellation: name_entry.and_then(|n| n.constellation.clone()),
            })
        })
        .collect();

    stars.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));
    Ok(stars)
}

pub(super) fn parse_constellations(json: Option<&str>) -> SkymapResult<Vec<ConstellationLines>> {
    let Some(json) = json else {
        return Err(SkymapError::catalog_parse(
            "constellations",
            "no data supplied",
        ));
    };

    let collection: FeatureCollection<ConstellationFeature> =
        serde_json::from_str(json).map_err(|e| SkymapError::catalog_parse("constellations", e))?;

    Ok(collection
        .features
        .into_iter()
        .map(|f| ConstellationLines {
            name: f.id,
            lines: f
                .geometry
                .coordinates
                .into_iter()
                .map(|line| line.into_iter().map(coord).collect())
                .collect(),
        })
        .collect())
}

pub(super) fn parse_milky_way(json: Option<&str>) -> SkymapResult<MilkyWayOutline> {
    let Some(json) = json else {
        return Err(SkymapError::catalog_parse("milky-way", "no data supplied"));
    };

    let collection: FeatureCollection<PolygonFeature> =
        serde_json::from_str(json).map_err(|e| SkymapError::catalog_parse("milky-way", e))?;

    let mut rings = Vec::new();
    for feature in collection.features {
        match feature.geometry {
            PolygonGeometry::Polygon { coordinates } => {
                rings.extend(
                    coordinates
                        .into_iter()
                        .map(|ring| ring.into_iter().map(coord).collect()),
                );
            }
            PolygonGeometry::MultiPolygon { coordinates } => {
                for polygon in coordinates {
                    rings.extend(
                        polygon
                            .into_iter()
                            .map(|ring| ring.into_iter().map(coord).collect()),
                    );
                }
            }
        }
    }
    Ok(MilkyWayOutline { rings })
}

/// Parses memory records from their persisted JSON array.
///
/// Total: malformed input yields an empty list with a logged warning, and
/// records without usable coordinates are kept (the detail collaborator may
/// still want them) but skipped at plot time.
pub fn parse_memory_records(json: &str) -> Vec<MemoryRecord> {
    match serde_json::from_str::<Vec<MemoryRecord>>(json) {
        Ok(records) => records,
        Err(err) => {
            log::warn!("catalog: memory records unreadable, plotting none: {}", err);
            Vec::new()
        }
    }
}
