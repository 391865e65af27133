//! Vehicle parameter contract checks.

use drivecore_errors::{ConfigError, ValidationError, validate, validate_range};

use crate::vehicle::{CURRENT_SCHEMA_VERSION, VehicleParams};

const MAX_MASS_KG: f64 = 20_000.0;
const MAX_ACTUATOR_DELAY_S: f64 = 2.0;
const MAX_ACCEL: f64 = 10.0;
const MAX_VEHICLE_SPEED: f64 = 60.0;

/// Check every constraint a control session relies on.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] for the first violated constraint.
pub fn validate_vehicle(params: &VehicleParams) -> Result<(), ConfigError> {
    validate!(!params.name.trim().is_empty(), ValidationError::required("name"));
    validate!(
        params.schema_version <= CURRENT_SCHEMA_VERSION,
        ValidationError::constraint(format!(
            "schema_version {} is newer than supported version {CURRENT_SCHEMA_VERSION}",
            params.schema_version
        ))
    );

    validate_range!("mass_kg", params.mass_kg, 1.0, MAX_MASS_KG);
    let delay = params.steer_actuator_delay_s;
    validate!(
        delay.is_finite() && delay > 0.0 && delay <= MAX_ACTUATOR_DELAY_S,
        ValidationError::out_of_range("steer_actuator_delay_s", delay, 0.0, MAX_ACTUATOR_DELAY_S)
    );

    validate!(
        params.cruise.long_press_frames > 0,
        ValidationError::constraint("cruise.long_press_frames must be > 0")
    );

    let long = &params.longitudinal;
    validate_range!("longitudinal.accel_min", long.accel_min, -MAX_ACCEL, 0.0);
    validate_range!("longitudinal.accel_max", long.accel_max, 0.0, MAX_ACCEL);
    validate!(
        long.brake_change.is_finite() && long.brake_change > 0.0 && long.brake_change <= 1.0,
        ValidationError::out_of_range("longitudinal.brake_change", long.brake_change, 0.0, 1.0)
    );

    let steer = &params.steer_limits;
    validate!(
        steer.steer_max > 0,
        ValidationError::constraint("steer_limits.steer_max must be > 0")
    );
    validate_range!("steer_limits.steer_delta_up", steer.steer_delta_up, 1, steer.steer_max);
    validate_range!(
        "steer_limits.steer_delta_down",
        steer.steer_delta_down,
        1,
        steer.steer_max
    );
    validate!(
        steer.steer_error_max >= 0,
        ValidationError::constraint("steer_limits.steer_error_max must be >= 0")
    );

    let auth = &params.authorization;
    validate_range!(
        "authorization.min_steer_speed",
        auth.min_steer_speed,
        0.0,
        MAX_VEHICLE_SPEED
    );
    if let Some(band) = auth.release_hysteresis {
        validate_range!(
            "authorization.release_hysteresis",
            band,
            0.0,
            MAX_VEHICLE_SPEED
        );
    }

    validate_range!(
        "engagement.min_enable_speed",
        params.engagement.min_enable_speed,
        0.0,
        MAX_VEHICLE_SPEED
    );

    Ok(())
}
