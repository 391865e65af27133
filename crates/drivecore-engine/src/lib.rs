//! DriveCore Engine - per-tick driver-assistance control loop
//!
//! [`ControlLoop`] owns every persistent state object of one vehicle session
//! and turns a [`VehicleSnapshot`] and a [`PlannerOutput`] into bounded
//! [`ControlOutputs`] once per control cycle:
//!
//! 1. engagement arbitration
//! 2. button debounce and press classification
//! 3. cruise set-speed arbitration, seeded on the enable edge
//! 4. the longitudinal brake/torque shaper
//! 5. the curvature lag compensator
//! 6. the lateral authorization gate and the steer torque limiter
//!
//! Configuration contract violations are caught once in
//! [`ControlLoop::new`]; a tick never fails.
//!
//! # Example
//!
//! ```
//! use drivecore_config::VehicleParams;
//! use drivecore_cruise::SpeedUnits;
//! use drivecore_engine::prelude::*;
//!
//! let mut control = ControlLoop::new(VehicleParams::preset("generic_host_cruise")?)?;
//! let snapshot = VehicleSnapshot {
//!     cruise_available: true,
//!     cruise_enabled: true,
//!     v_ego: 20.0,
//!     ..VehicleSnapshot::default()
//! };
//! let out = control.tick(&snapshot, &PlannerOutput::default(), SpeedUnits::Metric);
//! assert!(out.has_set_speed());
//! assert!(out.brake().is_some());
//! # Ok::<(), drivecore_errors::DriveCoreError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod control_loop;
pub mod outputs;
pub mod prelude;
pub mod snapshot;

pub use control_loop::ControlLoop;
pub use outputs::ControlOutputs;
pub use snapshot::{PlannerOutput, VehicleSnapshot};
