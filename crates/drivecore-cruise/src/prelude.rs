//! Prelude for the cruise crate.
//!
//! ```
//! use drivecore_cruise::prelude::*;
//!
//! let arbitrator = CruiseArbitrator::new(CruiseParams::inverted_family(30));
//! assert_eq!(arbitrator.phase(), ArbitratorPhase::Uninitialized);
//! ```

pub use crate::arbitrator::{CruiseArbitrator, CruiseInputs, CruiseParams};
pub use crate::constants::{V_CRUISE_INITIAL, V_CRUISE_MAX, V_CRUISE_MIN, V_CRUISE_MIN_IMPERIAL};
pub use crate::engagement::{
    EngagementArbiter, EngagementInputs, EngagementParams, EngagementStatus,
};
pub use crate::state::{ArbitratorPhase, CruiseArbitratorState};
pub use crate::strategy::CruiseStrategy;
pub use crate::units::SpeedUnits;
