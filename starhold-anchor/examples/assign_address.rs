use starhold_anchor::generate_coordinates;
use starhold_astro::{EquatorialCoord, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let unlock = Instant::from_utc(2030, 6, 15, 0, 0, 0)?;

    let address = generate_coordinates(
        "See you under this star in five years.",
        &unlock,
        "Ada",
        Some("user-42"),
    );

    let eq = EquatorialCoord::from_degrees(address.ra, address.dec);
    println!("Memory star in {}:", address.constellation);
    println!("  {}", eq);
    println!("  ({:.6}°, {:+.6}°)", address.ra, address.dec);

    // The address is a pure function of the inputs — recompute it anywhere,
    // any time, and it is the same star.
    let again = generate_coordinates(
        "See you under this star in five years.",
        &unlock,
        "Ada",
        Some("user-42"),
    );
    assert_eq!(address, again);
    println!("\nRecomputed address matches: determinism holds.");

    Ok(())
}
