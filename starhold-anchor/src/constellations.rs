//! The fixed constellation label table.
//!
//! Order matters: the generator indexes into this list, so reordering or
//! extending it reassigns labels on existing memories. Append-only is not
//! safe either, since the index is taken modulo the length.

/// The twelve constellation labels a memory can be filed under.
pub const CONSTELLATIONS: [&str; 12] = [
    "Orion",
    "Andromeda",
    "Sagittarius",
    "Cygnus",
    "Leo",
    "Scorpius",
    "Ursa Major",
    "Pegasus",
    "Centaurus",
    "Cassiopeia",
    "Lyra",
    "Aquila",
];
