//! Per-vehicle configuration for DriveCore
//!
//! [`VehicleParams`] gathers every static constant a control session needs:
//! cruise strategy and long-press threshold, acceleration bounds, steering
//! torque limits, steering authorization and engagement options.
//!
//! Parameters come from a built-in preset or from a YAML/JSON file and are
//! validated once, before a control session starts.
//!
//! # Example
//!
//! ```
//! use drivecore_config::VehicleParams;
//!
//! let params = VehicleParams::preset("ram_hd")?;
//! assert_eq!(params.steer_limits.steer_max, 361);
//! params.validate()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod presets;
pub mod validation;
pub mod vehicle;

pub use presets::{PresetCatalog, VEHICLE_PRESETS_YAML, load_presets, preset_names};
pub use validation::validate_vehicle;
pub use vehicle::{CURRENT_SCHEMA_VERSION, ConfigFormat, VehicleParams};
