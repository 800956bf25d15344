//! Geodesy helpers for the GYRE simulation.
//!
//! Coarse planning uses planar degree distances; motion and arrival use
//! proper spherical formulas. That asymmetry is deliberate: cheap ranking,
//! precise final motion.

pub mod geodesy;

pub use geodesy::{haversine_distance_m, initial_bearing_rad, step_from};
