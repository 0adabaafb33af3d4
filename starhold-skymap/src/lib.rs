//! Sky projection and interaction engine for the Starhold observatory view.
//!
//! Consumes a read-only celestial catalog plus memory markers, projects them
//! onto a 2D surface under a stereographic projection, and resolves pointer
//! interactions. This crate computes *what to draw and what was clicked*;
//! the drawing surface itself (canvas, GPU, terminal) is an external
//! collaborator that receives [`scene::FrameScene`] primitives and
//! [`hittest::Pick`] events.
//!
//! # Concurrency model
//!
//! Everything here is single-threaded and frame-driven. A
//! [`SkyRenderer`] owns one mutable [`ViewState`]; all mutation flows
//! through the named entry points (`apply_drag`, `apply_zoom`,
//! `set_target_rotation`, `tick`) from whatever event loop hosts it. There
//! are no locks because there is no concurrent writer, and no background
//! resources; dropping the renderer releases everything.
//!
//! # Failure policy
//!
//! Nothing in this crate panics across its public boundary. Malformed
//! catalog sections degrade to empty collections with a logged warning,
//! a non-finite view state self-heals to the identity rotation, and a
//! failing scene layer yields an empty layer for that frame. The worst
//! case is a visually degraded view, never a crash.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | [`SkyCatalog`], star/constellation/Milky Way/memory types, JSON ingestion |
//! | [`projection`] | [`Projector`] — rotation + stereographic forward/inverse |
//! | [`view`] | [`ViewState`] — drag/zoom/animation state machine |
//! | [`frame`] | [`DisplayFrame`] — polar/pan observer-mode adapters |
//! | [`shading`] | [`SkyShading`] — day/night phase and star visibility |
//! | [`hittest`] | Pointer-to-object resolution with fixed priority |
//! | [`scene`] | [`SkyRenderer`] — per-frame scene assembly |

pub mod catalog;
pub mod errors;
pub mod frame;
pub mod hittest;
pub mod projection;
pub mod scene;
pub mod shading;
pub mod view;

pub use catalog::{ConstellationLines, MemoryRecord, MilkyWayOutline, SkyCatalog, Star};
pub use errors::{SkymapError, SkymapResult};
pub use frame::{DisplayFrame, ObserverMode};
pub use hittest::{pick, BodyCandidate, Pick};
pub use projection::Projector;
pub use scene::{FrameScene, SkyRenderer};
pub use shading::SkyShading;
pub use view::{InteractionPhase, ViewState};
