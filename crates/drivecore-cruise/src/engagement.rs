//! Engagement arbitration.
//!
//! Two enables are tracked side by side: the adaptive-cruise (longitudinal)
//! enable and the lateral-only driver-assist enable, which may stay on while
//! cruise is merely available. The arbiter runs once per tick before button
//! debounce.

use serde::{Deserialize, Serialize};

use crate::constants::LANE_CHANGE_SPEED_MIN;

/// Static engagement configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngagementParams {
    /// Lateral control engages on cruise availability, independent of cruise
    pub enable_mads: bool,
    /// Engaging adaptive cruise also engages lateral control
    pub acc_mads_combo: bool,
    /// Pause lateral control for a blinker below lane-change speed
    pub below_speed_pause: bool,
    /// Lowest speed the vehicle's cruise module engages at, m/s
    pub min_enable_speed: f64,
}

/// Per-tick engagement inputs. Speed in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngagementInputs {
    /// Cruise main switch on and not faulted
    pub cruise_available: bool,
    /// Cruise reports active
    pub cruise_enabled: bool,
    /// Brake pedal pressed
    pub brake_pressed: bool,
    /// Accelerator pedal pressed
    pub gas_pressed: bool,
    /// LKAS toggle button pressed
    pub lkas_button: bool,
    /// Vehicle speed
    pub v_ego: f64,
    /// Left blinker on
    pub left_blinker: bool,
    /// Right blinker on
    pub right_blinker: bool,
}

/// Engagement decision for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngagementStatus {
    /// Lateral-only assist engaged
    pub lateral_enabled: bool,
    /// Adaptive cruise engaged
    pub longitudinal_enabled: bool,
    /// Driver switched steering assist off with the LKAS button
    pub lkas_disabled: bool,
    /// Blinker below lane-change speed pauses steering
    pub lateral_paused: bool,
}

impl EngagementStatus {
    /// Steering may be commanded this tick.
    pub fn lateral_active(&self) -> bool {
        self.lateral_enabled && !self.lkas_disabled && !self.lateral_paused
    }
}

/// Owns both enable flags and the edge memory they need.
#[derive(Debug, Clone)]
pub struct EngagementArbiter {
    params: EngagementParams,
    pcm_cruise: bool,
    lateral_enabled: bool,
    acc_enabled: bool,
    prev_cruise_available: Option<bool>,
    prev_cruise_enabled: bool,
    prev_reported_enabled: bool,
    prev_acc_mads_combo: bool,
    lkas_disabled: bool,
    lkas_button_prev: bool,
}

impl EngagementArbiter {
    /// `pcm_cruise` is true when the vehicle's cruise module owns the set
    /// speed.
    pub fn new(params: EngagementParams, pcm_cruise: bool) -> Self {
        Self {
            params,
            pcm_cruise,
            lateral_enabled: false,
            acc_enabled: false,
            prev_cruise_available: None,
            prev_cruise_enabled: false,
            prev_reported_enabled: false,
            prev_acc_mads_combo: false,
            lkas_disabled: false,
            lkas_button_prev: false,
        }
    }

    /// Advance one tick.
    pub fn update(&mut self, inputs: &EngagementInputs) -> EngagementStatus {
        let p = self.params;
        let available = inputs.cruise_available;
        let prev_available = self.prev_cruise_available.unwrap_or(available);
        let was_lateral = self.lateral_enabled;

        if available {
            if p.enable_mads {
                if !prev_available {
                    self.lateral_enabled = true;
                }
                if p.acc_mads_combo {
                    if !self.prev_acc_mads_combo && inputs.cruise_enabled {
                        self.lateral_enabled = true;
                    }
                    self.prev_acc_mads_combo = inputs.cruise_enabled;
                }
            }
        } else {
            self.lateral_enabled = false;
        }

        // Without lateral-only mode a cruise cancel or brake press drops lateral
        if !p.enable_mads
            && ((self.prev_cruise_enabled && !inputs.cruise_enabled) || inputs.brake_pressed)
        {
            self.lateral_enabled = false;
        }

        if !self.pcm_cruise {
            // Host-owned cruise engages on a rising edge of the reported flag
            let cancelled = self.prev_reported_enabled && !inputs.cruise_enabled;
            if !available
                || cancelled
                || inputs.brake_pressed
                || (inputs.gas_pressed && !inputs.cruise_enabled)
            {
                self.acc_enabled = false;
            } else if inputs.cruise_enabled && !self.prev_reported_enabled {
                self.acc_enabled = true;
            }
        } else if p.min_enable_speed > 0.0 {
            if inputs.gas_pressed && !inputs.cruise_enabled {
                self.acc_enabled = false;
            }
            self.acc_enabled = inputs.cruise_enabled || self.acc_enabled;
        }
        self.prev_reported_enabled = inputs.cruise_enabled;

        let cruise_enabled = if self.pcm_cruise {
            inputs.cruise_enabled
        } else {
            self.acc_enabled
        };

        if !p.enable_mads {
            if cruise_enabled && !self.prev_cruise_enabled {
                self.lateral_enabled = true;
            } else if !cruise_enabled {
                self.lateral_enabled = false;
            }
        }
        self.prev_cruise_enabled = cruise_enabled;

        if inputs.lkas_button && !self.lkas_button_prev {
            self.lkas_disabled = !self.lkas_disabled;
            tracing::info!(lkas_disabled = self.lkas_disabled, "LKAS button toggled");
        }
        self.lkas_button_prev = inputs.lkas_button;
        self.prev_cruise_available = Some(available);

        if was_lateral != self.lateral_enabled {
            tracing::debug!(lateral_enabled = self.lateral_enabled, "lateral engagement changed");
        }

        EngagementStatus {
            lateral_enabled: self.lateral_enabled,
            longitudinal_enabled: cruise_enabled,
            lkas_disabled: self.lkas_disabled,
            lateral_paused: p.below_speed_pause
                && inputs.v_ego < LANE_CHANGE_SPEED_MIN
                && (inputs.left_blinker || inputs.right_blinker),
        }
    }

    /// Return to the fresh-session state.
    pub fn reset(&mut self) {
        *self = Self::new(self.params, self.pcm_cruise);
    }
}
