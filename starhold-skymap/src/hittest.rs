//! Pointer-to-object resolution.
//!
//! Candidates are probed in a fixed priority order (memory markers,
//! solar-system bodies, named stars, unnamed stars, constellation line
//! segments) and the first hit wins. Denser, higher-value targets get the
//! larger radii and the earlier probes; the ordering is part of the
//! interaction contract and must not be "optimized" into a nearest-object
//! search, or overlapping candidates start resolving differently from one
//! click to the next.
//!
//! Unnamed stars fainter than magnitude 5.5 are skipped outright: they are
//! sub-pixel dots the user cannot be aiming at, and skipping them keeps the
//! probe loop short. A deliberate precision/performance trade.

use starhold_astro::EquatorialCoord;

use crate::catalog::{ConstellationLines, MemoryRecord, SkyCatalog, Star};
use crate::frame::DisplayFrame;
use crate::projection::Projector;

/// Hit radii in pixels, by priority.
const MEMORY_RADIUS: f64 = 20.0;
const BODY_RADIUS: f64 = 15.0;
const NAMED_STAR_RADIUS: f64 = 20.0;
const UNNAMED_STAR_RADIUS: f64 = 10.0;
const SEGMENT_RADIUS: f64 = 5.0;

/// Unnamed stars fainter than this are never probed.
const FAINT_PROBE_LIMIT: f64 = 5.5;

/// A solar-system body candidate, positioned by the caller for the current
/// instant.
#[derive(Debug, Clone)]
pub struct BodyCandidate {
    pub name: &'static str,
    pub position: EquatorialCoord,
}

/// The resolved click target, with the payload the detail-display
/// collaborator needs and the screen position it was found at.
#[derive(Debug, Clone)]
pub enum Pick<'a> {
    Memory {
        record: &'a MemoryRecord,
        screen: [f64; 2],
    },
    Planet {
        name: &'static str,
        position: EquatorialCoord,
        screen: [f64; 2],
    },
    Star {
        star: &'a Star,
        screen: [f64; 2],
    },
    Constellation {
        constellation: &'a ConstellationLines,
        screen: [f64; 2],
    },
}

impl Pick<'_> {
    /// The equatorial position to center the view on for this pick.
    pub fn position(&self) -> Option<EquatorialCoord> {
        match self {
            Pick::Memory { record, .. } => record.position(),
            Pick::Planet { position, .. } => Some(*position),
            Pick::Star { star, .. } => Some(star.position),
            Pick::Constellation { .. } => None,
        }
    }

    /// Where on screen the hit landed.
    pub fn screen(&self) -> [f64; 2] {
        match self {
            Pick::Memory { screen, .. }
            | Pick::Planet { screen, .. }
            | Pick::Star { screen, .. }
            | Pick::Constellation { screen, .. } => *screen,
        }
    }
}

/// Resolves a pointer position against everything on the sky, in priority
/// order. Returns `None` when nothing is within its radius.
pub fn pick<'a>(
    pointer: [f64; 2],
    catalog: &'a SkyCatalog,
    memories: &'a [MemoryRecord],
    bodies: &[BodyCandidate],
    projector: &Projector,
    frame: &DisplayFrame<'_>,
) -> Option<Pick<'a>> {
    let project = |eq: &EquatorialCoord| projector.project(frame.to_display_frame(eq));

    // 1. Memory markers.
    for record in memories {
        let Some(position) = record.position() else {
            continue;
        };
        if let Some(p) = project(&position) {
            if dist(p, pointer) < MEMORY_RADIUS {
                return Some(Pick::Memory {
                    record,
                    screen: pointer,
                });
            }
        }
    }

    // 2. Solar-system bodies.
    for body in bodies {
        if let Some(p) = project(&body.position) {
            if dist(p, pointer) < BODY_RADIUS {
                return Some(Pick::Planet {
                    name: body.name,
                    position: body.position,
                    screen: pointer,
                });
            }
        }
    }

    // 3. Stars: named first (larger radius), then bright unnamed.
    for star in &catalog.stars {
        let radius = if star.name.is_some() {
            NAMED_STAR_RADIUS
        } else if star.magnitude > FAINT_PROBE_LIMIT {
            continue;
        } else {
            UNNAMED_STAR_RADIUS
        };
        if let Some(p) = project(&star.position) {
            if dist(p, pointer) < radius {
                return Some(Pick::Star {
                    star,
                    screen: pointer,
                });
            }
        }
    }

    // 4. Constellation line segments.
    for constellation in &catalog.constellations {
        for line in &constellation.lines {
            for pair in line.windows(2) {
                let (Some(a), Some(b)) = (project(&pair[0]), project(&pair[1])) else {
                    continue;
                };
                if dist_to_segment(pointer, a, b) < SEGMENT_RADIUS {
                    return Some(Pick::Constellation {
                        constellation,
                        screen: pointer,
                    });
                }
            }
        }
    }

    None
}

fn dist(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

/// Distance from a point to the segment `v`-`w`.
fn dist_to_segment(p: [f64; 2], v: [f64; 2], w: [f64; 2]) -> f64 {
    let l2 = (v[0] - w[0]).powi(2) + (v[1] - w[1]).powi(2);
    if l2 == 0.0 {
        return dist(p, v);
    }
    let t = (((p[0] - v[0]) * (w[0] - v[0]) + (p[1] - v[1]) * (w[1] - v[1])) / l2).clamp(0.0, 1.0);
    dist(
        p,
        [v[0] + t * (w[0] - v[0]), v[1] + t * (w[1] - v[1])],
    )
}
