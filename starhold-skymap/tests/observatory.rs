//! End-to-end exercises of the observatory view: generated memory
//! addresses flowing through catalog, projection, rendering, and
//! hit-testing together.

use starhold_anchor::generate_coordinates;
use starhold_astro::{EquatorialCoord, Instant, ObserverContext};
use starhold_core::Location;
use starhold_skymap::catalog::parse_memory_records;
use starhold_skymap::view::HOME_ROTATION;
use starhold_skymap::{InteractionPhase, ObserverMode, Pick, SkyCatalog, SkyRenderer};

fn greenwich_night() -> ObserverContext {
    ObserverContext::new(
        Location::from_degrees(51.4769, 0.0).unwrap(),
        Instant::from_utc(2024, 12, 21, 23, 0, 0).unwrap(),
    )
}

#[test]
fn generated_memory_lands_on_the_map_and_is_clickable() {
    let unlock = Instant::from_utc(2030, 6, 15, 0, 0, 0).unwrap();
    let coord = generate_coordinates("for the stars", &unlock, "Ada", Some("user-1"));

    let json = format!(
        r#"[{{"star_coordinates":{{"ra":{},"dec":{}}},"recipient_name":"Ada","unlock_at":"2030-06-15T00:00:00Z"}}]"#,
        coord.ra, coord.dec
    );
    let memories = parse_memory_records(&json);
    assert_eq!(memories.len(), 1);

    let mut renderer = SkyRenderer::new(SkyCatalog::embedded(), 800.0, 600.0);
    renderer.set_memories(memories);

    // Center the view on the memory the way click-to-center would, then let
    // the animation run to completion.
    renderer
        .view_mut()
        .set_target_rotation([-coord.ra, -coord.dec, 0.0]);
    for _ in 0..2000 {
        if renderer.view().phase() != InteractionPhase::Animating {
            break;
        }
        renderer.view_mut().tick();
    }
    assert_eq!(renderer.view().phase(), InteractionPhase::Idle);

    // The memory now sits at the screen center and wins the hit-test.
    let scene = renderer.render_frame(1.0);
    assert_eq!(scene.memories.len(), 1);
    let marker = &scene.memories[0];
    assert!((marker.screen[0] - 400.0).abs() < 1.0);
    assert!((marker.screen[1] - 300.0).abs() < 1.0);

    let picked = renderer.pick_at([400.0, 300.0]).unwrap();
    assert!(matches!(picked, Pick::Memory { .. }));
}

#[test]
fn same_inputs_same_star_across_sessions() {
    // A "session restart" is just a second call; the address must not
    // drift between them.
    let unlock = Instant::from_utc(2031, 1, 1, 0, 0, 0).unwrap();
    let first = generate_coordinates("anniversary", &unlock, "Grace", None);
    let second = generate_coordinates("anniversary", &unlock, "Grace", None);
    assert_eq!(first, second);

    let eq = EquatorialCoord::from_degrees(first.ra, first.dec);
    assert!((eq.ra().degrees() - first.ra).abs() < 1e-9);
}

#[test]
fn full_frame_in_both_observer_modes() {
    let mut renderer = SkyRenderer::new(SkyCatalog::embedded(), 1024.0, 768.0);
    renderer.set_observer(Some(greenwich_night()));

    let polar = renderer.render_frame(0.0);
    assert!(!polar.stars.is_empty());

    renderer.set_mode(ObserverMode::Pan);
    let pan = renderer.render_frame(0.016);
    assert!(!pan.stars.is_empty());

    // Winter night: stars at full opacity in both modes.
    assert_eq!(polar.shading.star_visibility, 1.0);
    assert_eq!(pan.shading.star_visibility, 1.0);
}

#[test]
fn drag_zoom_and_reset_flow() {
    let mut renderer = SkyRenderer::new(SkyCatalog::embedded(), 800.0, 600.0);

    renderer.view_mut().begin_drag();
    renderer.view_mut().apply_drag(40.0, -20.0);
    renderer.view_mut().end_drag();
    assert_ne!(renderer.view().rotation(), HOME_ROTATION);

    renderer.view_mut().zoom_in();
    renderer.view_mut().zoom_in();
    assert_eq!(renderer.view().scale(), 1000.0);

    renderer.view_mut().reset();
    assert_eq!(renderer.view().scale(), 600.0);
    for _ in 0..2000 {
        if renderer.view().phase() != InteractionPhase::Animating {
            break;
        }
        renderer.view_mut().tick();
    }
    assert_eq!(renderer.view().rotation(), HOME_ROTATION);

    // A frame renders fine at every point of the flow.
    let scene = renderer.render_frame(2.5);
    assert!(!scene.graticule.is_empty());
}

#[test]
fn hostile_inputs_never_panic() {
    let catalog = SkyCatalog::from_json(
        Some("entirely broken"),
        Some("{}"),
        None,
        Some(r#"{"features":[{"geometry":{"type":"Polygon","coordinates":[]}}]}"#),
    );
    let mut renderer = SkyRenderer::new(catalog, 800.0, 600.0);
    renderer.set_memories(parse_memory_records("[not json"));

    renderer.view_mut().apply_drag(f64::NAN, f64::INFINITY);
    let scene = renderer.render_frame(f64::NAN);
    assert!(scene.healed);
    assert!(scene.stars.is_empty());

    assert!(renderer.pick_at([400.0, 300.0]).is_none());
}
