//! Cruise speed constants.
//!
//! Set speeds are in km/h; vehicle speeds arriving from the snapshot are in
//! m/s.

/// Highest set speed, km/h.
pub const V_CRUISE_MAX: f64 = 145.0;
/// Lowest set speed with metric units, km/h.
pub const V_CRUISE_MIN: f64 = 8.0;
/// Lowest set speed with imperial units: whole km/h of 20 mph.
pub const V_CRUISE_MIN_IMPERIAL: f64 = 32.0;
/// Lowest speed the generic strategy seeds from on enable, km/h.
pub const V_CRUISE_ENABLE_MIN: f64 = 40.0;
/// Sentinel for an uninitialized set speed, km/h.
pub const V_CRUISE_INITIAL: f64 = 255.0;
/// Long step with metric units (also the inverted family's seeding floor).
pub const V_CRUISE_DELTA: f64 = 5.0;
/// Long step with imperial units: whole km/h of 5 mph.
pub const V_CRUISE_DELTA_IMPERIAL: f64 = 8.0;
/// Stored set speeds at or above this were never real.
pub const V_CRUISE_REAL_LIMIT: f64 = 250.0;

/// m/s to km/h.
pub const MS_TO_KPH: f64 = 3.6;
/// mph to km/h.
pub const MPH_TO_KPH: f64 = 1.609_344;
/// mph to m/s.
pub const MPH_TO_MS: f64 = 0.447_04;

/// Below this speed (m/s) a blinker pauses lateral control when configured.
pub const LANE_CHANGE_SPEED_MIN: f64 = 20.0 * MPH_TO_MS;
