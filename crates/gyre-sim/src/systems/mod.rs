//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only). They do not own state — state lives in components, the
//! mission list, and the engine's RNG.

pub mod collection;
pub mod missions;
pub mod movement;
pub mod navigation;
pub mod snapshot;
