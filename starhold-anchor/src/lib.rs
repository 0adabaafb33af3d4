//! Deterministic celestial addresses for Starhold memories.
//!
//! Every memory gets a stable, unique point on the celestial sphere derived
//! purely from its authoring inputs: message text, unlock instant,
//! recipient name, and (optionally) the owning user id. The same four
//! inputs always produce the same `(ra, dec, constellation)` triple, so a
//! memory's star can be recomputed offline, forever.
//!
//! # The derivation is a permanent contract
//!
//! The hash, the draw expansion, and the mapping into sky coordinates are
//! all pinned by regression tests in this crate. Changing any of them
//! silently moves every previously assigned star; treat the algorithm in
//! [`generate_coordinates`] as frozen and version any successor separately.
//!
//! ```
//! use starhold_anchor::generate_coordinates;
//! use starhold_astro::Instant;
//!
//! let unlock = Instant::from_utc(2030, 6, 15, 0, 0, 0)?;
//! let a = generate_coordinates("happy birthday", &unlock, "Ada", Some("user-42"));
//! let b = generate_coordinates("happy birthday", &unlock, "Ada", Some("user-42"));
//! assert_eq!(a, b);
//! # Ok::<(), starhold_astro::AstroError>(())
//! ```

mod constellations;
mod generator;
mod hash;

pub use constellations::CONSTELLATIONS;
pub use generator::{generate_coordinates, MemoryCoordinate};
