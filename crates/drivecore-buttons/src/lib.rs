//! Cruise button input for driver-assist control
//!
//! This crate turns per-tick button samples into edge events with hold
//! durations, keeps per-button timers and press-time snapshots, and
//! classifies presses into short and long actions.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod classify;
pub mod debounce;
pub mod types;

pub use classify::*;
pub use debounce::*;
pub use types::*;

/// Maximum number of events a single tick can produce (one per kind).
pub const MAX_EVENTS_PER_TICK: usize = ButtonKind::ALL.len();

/// Button events produced in one tick.
pub type ButtonEvents = heapless::Vec<ButtonEvent, MAX_EVENTS_PER_TICK>;
