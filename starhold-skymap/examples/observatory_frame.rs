use starhold_astro::{Instant, ObserverContext};
use starhold_core::Location;
use starhold_skymap::{ObserverMode, SkyCatalog, SkyRenderer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Royal Observatory, Greenwich, on a winter night.
    let observer = ObserverContext::new(
        Location::from_degrees(51.4769, 0.0)?,
        Instant::from_utc(2024, 12, 21, 23, 0, 0)?,
    );

    let mut renderer = SkyRenderer::new(SkyCatalog::embedded(), 1280.0, 720.0);
    renderer.set_observer(Some(observer));
    renderer.set_mode(ObserverMode::Pan);

    // Simulate a short interaction: drag the sky a little, zoom in one
    // step, then render a frame.
    renderer.view_mut().begin_drag();
    renderer.view_mut().apply_drag(60.0, -25.0);
    renderer.view_mut().end_drag();
    renderer.view_mut().zoom_in();

    let scene = renderer.render_frame(0.0);

    println!("Sky phase: {:?}", scene.shading.phase);
    println!("Star visibility: {:.2}", scene.shading.star_visibility);
    println!("Visible stars: {}", scene.stars.len());
    println!("Visible constellation figures: {}", scene.constellations.len());
    println!("Solar-system bodies in view: {}", scene.bodies.len());

    for marker in scene.stars.iter().filter(|s| s.label.is_some()).take(5) {
        println!(
            "  {} at ({:.0}, {:.0})",
            marker.label.as_deref().unwrap_or("?"),
            marker.screen[0],
            marker.screen[1]
        );
    }

    // What would a click in the middle of the viewport select?
    match renderer.pick_at([640.0, 360.0]) {
        Some(pick) => println!("Center click hits: {:?}", pick.screen()),
        None => println!("Center click hits empty sky."),
    }

    Ok(())
}
