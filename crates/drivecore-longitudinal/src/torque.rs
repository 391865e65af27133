//! Traction torque request.

/// Converts power per rpm to torque: 60 / (2π).
pub const TORQUE_SCALE: f64 = 9.55414;

/// Look-ahead horizon of the torque estimate, s.
const HORIZON_S: f64 = 1.0;

/// Engine speed is floored here before dividing.
const MIN_ENGINE_RPM: f64 = 1.0;

/// Estimate the engine torque request for `accel`.
///
/// The work needed to reach `accel` over a one second horizon,
/// `mass · accel · (½·accel·t² + v·t)`, is divided by engine speed and
/// scaled to torque. The measured engine torque is then added as a baseline,
/// except when it is negative while the request is positive.
///
/// This is an empirical estimate kept for parity with tuned vehicles rather
/// than a validated powertrain model.
///
/// # Example
///
/// ```
/// use drivecore_longitudinal::torque_request;
///
/// let torque = torque_request(1.0, 2_000.0, 10.0, 50.0, 2_000.0);
/// assert!((torque - 150.31847).abs() < 1e-3);
/// ```
pub fn torque_request(
    accel: f64,
    mass_kg: f64,
    v_ego_raw: f64,
    engine_torque: f64,
    engine_rpm: f64,
) -> f64 {
    let distance = 0.5 * accel * HORIZON_S * HORIZON_S + v_ego_raw * HORIZON_S;
    let rpm = if engine_rpm.is_nan() {
        MIN_ENGINE_RPM
    } else {
        engine_rpm.max(MIN_ENGINE_RPM)
    };
    let torque = mass_kg * accel * distance * TORQUE_SCALE / rpm;

    if engine_torque < 0.0 && torque > 0.0 {
        torque
    } else {
        torque + engine_torque
    }
}
