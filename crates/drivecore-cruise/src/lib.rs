//! Cruise Set-Speed Arbitration for DriveCore
//!
//! This crate owns the driver's requested cruise speed. Each tick it consumes
//! debounced button events and timers plus driver-override signals and
//! produces the next set speed and the speed shown on the cluster.
//!
//! # Overview
//!
//! - **PCM native**: the vehicle's cruise module owns the set speed and the
//!   arbitrator only mirrors it
//! - **Generic**: host-owned set speed with short presses, long-press
//!   auto-repeat and snapping to round steps
//! - **Inverted family**: host-owned set speed for a vehicle family whose
//!   wiring swaps the short and long press actions
//! - **Engagement**: the adaptive-cruise enable and the lateral-only
//!   driver-assist enable, arbitrated from cruise state and pedals
//!
//! An uninitialized set speed is the sentinel [`V_CRUISE_INITIAL`]; check
//! [`CruiseArbitratorState::is_initialized`] before trusting it.
//!
//! # Example
//!
//! ```
//! use drivecore_cruise::prelude::*;
//! use drivecore_buttons::{ButtonSample, ButtonTracker, PressContext};
//!
//! let mut arbitrator = CruiseArbitrator::new(CruiseParams::generic(50));
//! let mut buttons = ButtonTracker::new();
//!
//! let events = buttons.update(&ButtonSample::released(), PressContext::default());
//! let inputs = CruiseInputs {
//!     cruise_available: true,
//!     enabled: true,
//!     v_ego: 20.0,
//!     ..CruiseInputs::default()
//! };
//! arbitrator.update(&inputs, &events, &buttons);
//! arbitrator.initialize(&inputs, &events);
//! assert_eq!(arbitrator.state().set_speed_kph, 72.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod arbitrator;
pub mod constants;
pub mod engagement;
pub mod prelude;
pub mod state;
pub mod strategy;
pub mod units;

pub use arbitrator::{CruiseArbitrator, CruiseInputs, CruiseParams};
pub use constants::*;
pub use engagement::{EngagementArbiter, EngagementInputs, EngagementParams, EngagementStatus};
pub use state::{ArbitratorPhase, CruiseArbitratorState};
pub use strategy::{CruiseStrategy, update_generic, update_inverted};
pub use units::SpeedUnits;
