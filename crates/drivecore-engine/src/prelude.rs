//! Prelude for the control loop
//!
//! ```
//! use drivecore_engine::prelude::*;
//! ```

pub use crate::control_loop::ControlLoop;
pub use crate::outputs::ControlOutputs;
pub use crate::snapshot::{PlannerOutput, VehicleSnapshot};
