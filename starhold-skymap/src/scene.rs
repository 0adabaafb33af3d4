//! Per-frame scene assembly.
//!
//! [`SkyRenderer`] owns the view state and the read-only inputs, and turns
//! them into a [`FrameScene`] of draw primitives once per animation frame.
//! The external drawing surface walks the scene's layers in order; this
//! crate never touches a canvas.
//!
//! # Frame isolation
//!
//! A sky view lives inside a continuous animation loop with no caller to
//! report an error to; the only recovery is "try again next frame". Each
//! layer is therefore assembled in isolation: a failing layer logs which
//! sub-step failed and contributes an empty layer, and
//! [`render_frame`](SkyRenderer::render_frame) itself always returns a
//! scene. Before anything is projected, the view state is checked for
//! non-finite corruption and healed to the identity rotation.

use starhold_astro::{moon_position, planet_position, EquatorialCoord, ObserverContext, Planet};

use crate::catalog::{MemoryRecord, SkyCatalog};
use crate::errors::SkymapResult;
use crate::frame::{DisplayFrame, ObserverMode};
use crate::hittest::{pick, BodyCandidate, Pick};
use crate::projection::Projector;
use crate::shading::SkyShading;
use crate::view::ViewState;

/// A projected polyline in screen pixels. Runs are split wherever the
/// source line leaves the visible cap.
pub type Polyline = Vec<[f64; 2]>;

/// A star ready to draw.
#[derive(Debug, Clone)]
pub struct StarMarker {
    pub screen: [f64; 2],
    pub radius: f64,
    /// Final opacity: catalog brightness × day/night visibility.
    pub alpha: f64,
    /// Label to draw beside the dot (bright named stars only).
    pub label: Option<String>,
    /// Brightest stars get a soft halo.
    pub halo: bool,
}

/// A solar-system body ready to draw.
#[derive(Debug, Clone)]
pub struct BodyMarker {
    pub name: &'static str,
    pub screen: [f64; 2],
}

/// A memory marker ready to draw.
#[derive(Debug, Clone)]
pub struct MemoryMarker {
    pub screen: [f64; 2],
    pub recipient_name: String,
    /// Pulse phase in [0, 1] for the beacon animation.
    pub pulse: f64,
}

/// A constellation figure's projected segments.
#[derive(Debug, Clone)]
pub struct ConstellationPath {
    pub name: String,
    pub segments: Vec<Polyline>,
}

/// Everything one frame draws, in paint order.
#[derive(Debug, Clone)]
pub struct FrameScene {
    pub shading: SkyShading,
    pub milky_way: Vec<Polyline>,
    pub graticule: Vec<Polyline>,
    pub constellations: Vec<ConstellationPath>,
    pub stars: Vec<StarMarker>,
    pub bodies: Vec<BodyMarker>,
    pub memories: Vec<MemoryMarker>,
    /// True when this frame repaired a corrupted view state.
    pub healed: bool,
}

/// Labels are drawn for stars at least this bright.
const LABEL_MAG_LIMIT: f64 = 1.0;

/// Halos are drawn for stars at least this bright.
const HALO_MAG_LIMIT: f64 = 1.0;

/// Memory beacon pulse rate, radians per second.
const PULSE_RATE: f64 = 4.0;

/// The sky view engine: owns the view state, consumes the catalog and
/// memory records, emits scenes and pick events.
pub struct SkyRenderer {
    catalog: SkyCatalog,
    memories: Vec<MemoryRecord>,
    view: ViewState,
    mode: ObserverMode,
    observer: Option<ObserverContext>,
    viewport: [f64; 2],
    graticule: Vec<Vec<EquatorialCoord>>,
}

impl SkyRenderer {
    /// Creates a renderer for a viewport of the given pixel size.
    pub fn new(catalog: SkyCatalog, width: f64, height: f64) -> Self {
        Self {
            catalog,
            memories: Vec::new(),
            view: ViewState::new(),
            mode: ObserverMode::Polar,
            observer: None,
            viewport: [width, height],
            graticule: build_graticule(),
        }
    }

    /// Replaces the memory records (they arrive as an already-resolved
    /// array from the persistence collaborator).
    pub fn set_memories(&mut self, memories: Vec<MemoryRecord>) {
        self.memories = memories;
    }

    /// Sets the observer context (or clears it).
    pub fn set_observer(&mut self, observer: Option<ObserverContext>) {
        self.observer = observer;
    }

    /// Switches between polar and pan observer modes.
    pub fn set_mode(&mut self, mode: ObserverMode) {
        self.mode = mode;
    }

    /// Updates the viewport size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = [width, height];
    }

    /// Mutable access to the view state for the input handlers.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Read access to the view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The current display-frame adapter.
    fn display_frame(&self) -> DisplayFrame<'_> {
        DisplayFrame::new(self.mode, self.observer.as_ref())
    }

    /// The projector for the current view state.
    fn projector(&self) -> Projector {
        Projector::new(
            self.view.rotation(),
            self.view.scale(),
            self.viewport[0],
            self.viewport[1],
        )
    }

    /// Resolves a pointer position against the scene, in priority order.
    pub fn pick_at(&self, pointer: [f64; 2]) -> Option<Pick<'_>> {
        let projector = self.projector();
        let frame = self.display_frame();
        let bodies = self.solar_bodies();
        pick(
            pointer,
            &self.catalog,
            &self.memories,
            &bodies,
            &projector,
            &frame,
        )
    }

    /// Handles a click: resolves the target and, when it has a position,
    /// starts a centering animation toward it. Returns the pick for the
    /// detail-display collaborator.
    pub fn click_at(&mut self, pointer: [f64; 2]) -> Option<Pick<'_>> {
        let center = {
            let frame = self.display_frame();
            self.pick_at(pointer)
                .and_then(|p| p.position())
                .map(|eq| frame.center_rotation(&eq))
        };
        if let Some(rotation) = center {
            self.view.set_target_rotation(rotation);
        }
        self.pick_at(pointer)
    }

    /// Assembles the scene for one frame.
    ///
    /// `elapsed_seconds` is the caller's monotonic animation clock (this
    /// crate reads no clocks of its own) and only drives the memory
    /// beacon pulse.
    pub fn render_frame(&mut self, elapsed_seconds: f64) -> FrameScene {
        let healed = self.view.heal();
        if healed {
            log::warn!("skymap: non-finite view state detected, reset to identity");
        }
        self.view.tick();

        let projector = self.projector();
        let frame = self.display_frame();
        let shading = SkyShading::compute(self.observer.as_ref());

        let milky_way = isolate("milky-way", || {
            Ok(self
                .catalog
                .milky_way
                .rings
                .iter()
                .flat_map(|ring| project_polyline(ring, &projector, &frame))
                .collect())
        });

        let graticule = isolate("graticule", || {
            Ok(self
                .graticule
                .iter()
                .flat_map(|line| project_polyline(line, &projector, &frame))
                .collect())
        });

        let constellations = isolate("constellations", || {
            Ok(self
                .catalog
                .constellations
                .iter()
                .map(|c| ConstellationPath {
                    name: c.name.clone(),
                    segments: c
                        .lines
                        .iter()
                        .flat_map(|line| project_polyline(line, &projector, &frame))
                        .collect(),
                })
                .filter(|c| !c.segments.is_empty())
                .collect())
        });

        let stars = isolate("stars", || {
            Ok(self
                .catalog
                .stars
                .iter()
                .filter_map(|star| {
                    let screen = projector.project(frame.to_display_frame(&star.position))?;
                    let alpha = star.base_alpha() * shading.star_visibility;
                    if alpha <= 0.0 {
                        return None;
                    }
                    Some(StarMarker {
                        screen,
                        radius: star.draw_radius(),
                        alpha,
                        label: star
                            .name
                            .as_ref()
                            .filter(|_| star.magnitude < LABEL_MAG_LIMIT)
                            .cloned(),
                        halo: star.magnitude < HALO_MAG_LIMIT,
                    })
                })
                .collect())
        });

        let bodies = isolate("bodies", || {
            Ok(self
                .solar_bodies()
                .into_iter()
                .filter_map(|body| {
                    let screen = projector.project(frame.to_display_frame(&body.position))?;
                    Some(BodyMarker {
                        name: body.name,
                        screen,
                    })
                })
                .collect())
        });

        let pulse = (PULSE_RATE * elapsed_seconds).sin().mul_add(0.5, 0.5);
        let memories = isolate("memories", || {
            Ok(self
                .memories
                .iter()
                .filter_map(|record| {
                    let position = record.position()?;
                    let screen = projector.project(frame.to_display_frame(&position))?;
                    Some(MemoryMarker {
                        screen,
                        recipient_name: record.recipient_name.clone(),
                        pulse: if pulse.is_finite() { pulse } else { 0.0 },
                    })
                })
                .collect())
        });

        FrameScene {
            shading,
            milky_way,
            graticule,
            constellations,
            stars,
            bodies,
            memories,
            healed,
        }
    }

    /// Solar-system body candidates for the current instant. Empty without
    /// an observer: no instant, no ephemeris.
    fn solar_bodies(&self) -> Vec<BodyCandidate> {
        let Some(obs) = self.observer.as_ref() else {
            return Vec::new();
        };
        let mut bodies: Vec<BodyCandidate> = Planet::ALL
            .iter()
            .map(|&planet| BodyCandidate {
                name: planet.name(),
                position: planet_position(planet, &obs.instant),
            })
            .collect();
        bodies.push(BodyCandidate {
            name: "Moon",
            position: moon_position(&obs.instant),
        });
        bodies
    }
}

/// Runs one layer builder, degrading to the layer's default on failure.
fn isolate<T: Default>(layer: &'static str, build: impl FnOnce() -> SkymapResult<T>) -> T {
    match build() {
        Ok(value) => value,
        Err(err) => {
            log::error!("skymap: layer '{}' failed, drawing empty: {}", layer, err);
            T::default()
        }
    }
}

/// Projects a line string, splitting it into runs wherever a vertex leaves
/// the visible cap. Single-point runs are dropped: nothing to stroke.
fn project_polyline(
    line: &[EquatorialCoord],
    projector: &Projector,
    frame: &DisplayFrame<'_>,
) -> Vec<Polyline> {
    let mut runs = Vec::new();
    let mut current: Polyline = Vec::new();
    for eq in line {
        match projector.project(frame.to_display_frame(eq)) {
            Some(p) => current.push(p),
            None => {
                if current.len() > 1 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > 1 {
        runs.push(current);
    }
    runs
}

/// The RA/Dec graticule: meridians every 10° (sampled to ±80°) and
/// parallels every 10°, matching the classic 10° celestial grid.
fn build_graticule() -> Vec<Vec<EquatorialCoord>> {
    let mut lines = Vec::new();
    for ra_step in 0..36 {
        let ra = f64::from(ra_step) * 10.0;
        let meridian = (-80..=80)
            .step_by(5)
            .map(|dec| EquatorialCoord::from_degrees(ra, f64::from(dec)))
            .collect();
        lines.push(meridian);
    }
    for dec_step in -8..=8 {
        let dec = f64::from(dec_step) * 10.0;
        let parallel = (0..=72)
            .map(|i| EquatorialCoord::from_degrees(f64::from(i) * 5.0, dec))
            .collect();
        lines.push(parallel);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StarCoordinates;
    use starhold_astro::Instant;
    use starhold_core::Location;

    fn renderer() -> SkyRenderer {
        SkyRenderer::new(SkyCatalog::embedded(), 800.0, 600.0)
    }

    fn observer() -> ObserverContext {
        ObserverContext::new(
            Location::from_degrees(51.4769, 0.0).unwrap(),
            Instant::from_utc(2024, 12, 21, 23, 0, 0).unwrap(),
        )
    }

    fn memory_at(ra: f64, dec: f64) -> MemoryRecord {
        MemoryRecord {
            star_coordinates: Some(StarCoordinates { ra, dec }),
            recipient_name: "Ada".into(),
            unlock_at: None,
        }
    }

    #[test]
    fn frame_renders_populated_scene() {
        let mut r = renderer();
        let scene = r.render_frame(0.0);
        assert!(!scene.stars.is_empty());
        assert!(!scene.graticule.is_empty());
        assert!(!scene.constellations.is_empty());
        assert!(!scene.healed);
        // No observer: full night, no bodies.
        assert_eq!(scene.shading.star_visibility, 1.0);
        assert!(scene.bodies.is_empty());
    }

    #[test]
    fn corruption_self_heals_in_one_frame() {
        let mut r = renderer();
        r.view_mut().apply_drag(f64::NAN, 0.0);
        assert!(r.view().rotation()[0].is_nan());

        let scene = r.render_frame(0.016);
        assert!(scene.healed);
        assert_eq!(r.view().rotation(), [0.0, 0.0, 0.0]);
        // And the scene still drew.
        assert!(!scene.stars.is_empty());

        let scene = r.render_frame(0.032);
        assert!(!scene.healed);
    }

    #[test]
    fn observer_enables_bodies_and_shading() {
        let mut r = renderer();
        r.set_observer(Some(observer()));
        let scene = r.render_frame(0.0);
        // Winter night at Greenwich: full star visibility.
        assert_eq!(scene.shading.star_visibility, 1.0);
        // Five planets plus the moon are candidates; only those inside the
        // visible cap make it into the scene.
        assert_eq!(r.solar_bodies().len(), 6);
        assert!(scene.bodies.len() <= 6);
    }

    #[test]
    fn memories_project_and_pulse() {
        let mut r = renderer();
        r.set_memories(vec![memory_at(0.0, -45.0), memory_at(10.0, -40.0)]);
        // Home rotation centers (0°, +45°); these memories sit 85-90° away,
        // well inside the 120° cap.
        let scene = r.render_frame(0.5);
        assert!(!scene.memories.is_empty());
        for m in &scene.memories {
            assert!((0.0..=1.0).contains(&m.pulse));
            assert_eq!(m.recipient_name, "Ada");
        }
    }

    #[test]
    fn memories_without_coordinates_are_skipped() {
        let mut r = renderer();
        r.set_memories(vec![MemoryRecord {
            star_coordinates: None,
            recipient_name: "Ghost".into(),
            unlock_at: None,
        }]);
        let scene = r.render_frame(0.0);
        assert!(scene.memories.is_empty());
    }

    #[test]
    fn click_on_memory_emits_pick_and_centers() {
        let mut r = renderer();
        // Place a memory at the current view center so it's clickable at
        // the screen midpoint. Home rotation is [0, -45, 0], which centers
        // (0°, +45°).
        r.set_memories(vec![memory_at(0.0, 45.0)]);

        let result = r.click_at([400.0, 300.0]);
        assert!(matches!(result, Some(Pick::Memory { .. })));

        // Click-to-center set a target equal to the memory's own center
        // rotation; the view was already there, so the animation collapses
        // within a tick or two.
        assert!(r.view().target_rotation().is_some());
        r.view_mut().tick();
        assert!(r.view().target_rotation().is_none());
    }

    #[test]
    fn click_on_empty_sky_returns_none() {
        let mut r = renderer();
        // Nothing at the screen corner.
        assert!(r.click_at([2.0, 2.0]).is_none());
        assert!(r.view().target_rotation().is_none());
    }

    #[test]
    fn pan_mode_renders_without_observer() {
        // Degrades to polar internally; must not panic or empty the scene.
        let mut r = renderer();
        r.set_mode(ObserverMode::Pan);
        let scene = r.render_frame(0.0);
        assert!(!scene.stars.is_empty());
    }

    #[test]
    fn pan_mode_with_observer_shifts_scene_over_time() {
        let mut r = renderer();
        r.set_mode(ObserverMode::Pan);
        r.set_observer(Some(observer()));
        let scene_a = r.render_frame(0.0);

        let later = ObserverContext::new(
            Location::from_degrees(51.4769, 0.0).unwrap(),
            Instant::from_utc(2024, 12, 21, 23, 30, 0).unwrap(),
        );
        r.set_observer(Some(later));
        let scene_b = r.render_frame(0.0);

        // Same view state, same catalog, but the horizon frame rotated
        // under the stars, so the projected star field moved.
        let a = scene_a.stars.first().map(|s| s.screen);
        let b = scene_b.stars.first().map(|s| s.screen);
        if let (Some(a), Some(b)) = (a, b) {
            assert!(
                (a[0] - b[0]).abs() + (a[1] - b[1]).abs() > 1e-6,
                "pan-mode scene did not track sidereal time"
            );
        }
    }

    #[test]
    fn polyline_splits_at_clip_boundary() {
        let projector = Projector::new([0.0, 0.0, 0.0], 600.0, 800.0, 600.0);
        let frame = DisplayFrame::new(ObserverMode::Polar, None);
        // A parallel crossing the whole sphere: part of it is beyond the
        // 120° cap, so it must come back as more than one run (or one run
        // shorter than the input).
        let line: Vec<EquatorialCoord> = (0..=72)
            .map(|i| EquatorialCoord::from_degrees(f64::from(i) * 5.0, 0.0))
            .collect();
        let runs = project_polyline(&line, &projector, &frame);
        assert!(!runs.is_empty());
        let total: usize = runs.iter().map(Vec::len).sum();
        assert!(total < line.len(), "clipped vertices were not dropped");
    }

    #[test]
    fn zoom_controls_reach_view_state() {
        let mut r = renderer();
        r.view_mut().zoom_in();
        assert_eq!(r.view().scale(), 800.0);
        r.view_mut().zoom_out();
        assert_eq!(r.view().scale(), 600.0);
    }
}
