//! End-to-end scenario tests for DriveCore
//!
//! The [`common::ScenarioRunner`] drives a full [`drivecore_engine::ControlLoop`]
//! tick by tick from scripted driver inputs and planner requests, so tests
//! can check the combined behaviour of debounce, arbitration and both
//! actuator shapers.

#![deny(rust_2018_idioms)]
#![deny(warnings)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::print_stdout)]

pub mod common;

/// Vehicle speed used by the cruising scenarios, m/s (72 km/h).
pub const CRUISE_SPEED_MS: f64 = 20.0;
