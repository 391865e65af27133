//! Tick-Safe Rate Limiting for DriveCore
//!
//! This crate provides the bounded-change primitives shared by the actuator
//! shapers of the control loop.
//!
//! # Overview
//!
//! - **Rate Limit**: clamps a value's change per tick between a floor and a
//!   ceiling step
//! - **Steer Torque**: driver-override aware steering torque limits built on
//!   the rate limit primitive with direction-aware asymmetric steps
//!
//! # RT Safety Guarantees
//!
//! All filter implementations are tick-safe:
//! - No heap allocations in filter hot paths
//! - O(1) time complexity for all operations
//! - No syscalls or I/O in filter functions
//! - All state types are `#[repr(C)]` for stable ABI
//!
//! # Example
//!
//! ```
//! use drivecore_filters::prelude::*;
//!
//! // Create filter states at session start
//! let mut steer = SteerTorqueState::new();
//! let limits = SteerTorqueLimits::new(261, 3, 3, 80);
//!
//! // In the control loop:
//! let applied = steer_torque_filter(200, 0, &limits, &mut steer);
//! assert_eq!(applied, 3);
//! assert_eq!(rate_limit(10.0, 0.0, -1.0, 1.0), 1.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod prelude;
pub mod rate_limit;
pub mod steer_torque;

pub use rate_limit::rate_limit;
pub use steer_torque::{SteerTorqueLimits, SteerTorqueState, steer_torque_filter};
