//! Simulation constants and tuning parameters.

/// Nominal vessel tick period in seconds.
pub const VESSEL_TICK_SECS: f64 = 5.0;

// --- Kinematics ---

/// Meters per second in one knot.
pub const KNOTS_TO_MPS: f64 = 0.514444;

/// Minimum effective step speed (m/s). Applied even to speed-0 vessels so
/// they crawl rather than freeze; preserved reference behavior.
pub const MIN_STEP_SPEED_MPS: f64 = 0.1;

/// Meters per degree of latitude used by the local step approximation.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Mean Earth radius in meters (haversine).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// --- Navigation ---

/// Maximum waypoints in a vessel's plan.
pub const MAX_PLAN_WAYPOINTS: usize = 3;

/// Range from a waypoint at which it counts as reached (meters).
pub const ARRIVAL_RADIUS_M: f64 = 5_000.0;

/// Remaining leg length below which a vessel is already at its target
/// and completes the waypoint without moving (meters).
pub const ZERO_LEG_EPSILON_M: f64 = 0.5;

// --- Trail ---

/// Maximum retained trail positions per vessel.
pub const MAX_TRAIL_POINTS: usize = 200;

// --- Collection accumulators (cosmetic) ---

/// Plastic recovered per tick while transiting (kg, uniform bounds).
pub const PLASTIC_GAIN_TRANSIT_KG: (f64, f64) = (0.5, 3.0);

/// Plastic recovered per tick while inside a hotspot's arrival radius (kg).
pub const PLASTIC_GAIN_ON_SITE_KG: (f64, f64) = (4.0, 12.0);

/// Battery drain per tick (percentage points, uniform bounds).
pub const BATTERY_DRAIN_PCT: (f64, f64) = (0.05, 0.30);

// --- Hotspot severity thresholds (particles/km²) ---

/// Concentration at or above which a hotspot is Critical.
pub const SEVERITY_CRITICAL_PPKM2: f64 = 1_000.0;

/// Concentration at or above which a hotspot is High.
pub const SEVERITY_HIGH_PPKM2: f64 = 500.0;

/// Concentration at or above which a hotspot is Medium.
pub const SEVERITY_MEDIUM_PPKM2: f64 = 200.0;
