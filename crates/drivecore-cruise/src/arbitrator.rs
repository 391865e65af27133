//! Cruise speed arbitrator.

use drivecore_buttons::{ButtonEvent, ButtonKind, ButtonTracker};
use serde::{Deserialize, Serialize};

use crate::constants::{MS_TO_KPH, V_CRUISE_DELTA, V_CRUISE_ENABLE_MIN, V_CRUISE_MAX};
use crate::state::{ArbitratorPhase, CruiseArbitratorState};
use crate::strategy::{CruiseStrategy, update_generic, update_inverted};
use crate::units::SpeedUnits;

/// Static cruise configuration for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CruiseParams {
    /// Set-speed ownership and press semantics
    pub strategy: CruiseStrategy,
    /// Ticks a button must be held to count as a long press
    pub long_press_frames: u32,
}

impl CruiseParams {
    /// Host-owned generic cruise.
    pub const fn generic(long_press_frames: u32) -> Self {
        Self {
            strategy: CruiseStrategy::Generic,
            long_press_frames,
        }
    }

    /// Host-owned cruise with swapped press semantics.
    pub const fn inverted_family(long_press_frames: u32) -> Self {
        Self {
            strategy: CruiseStrategy::InvertedFamily,
            long_press_frames,
        }
    }

    /// Vehicle-owned cruise.
    pub const fn pcm_native() -> Self {
        Self {
            strategy: CruiseStrategy::PcmNative,
            long_press_frames: 50,
        }
    }
}

impl Default for CruiseParams {
    fn default() -> Self {
        Self::generic(50)
    }
}

/// Per-tick inputs to the arbitrator. Speeds are in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CruiseInputs {
    /// Cruise main switch on and cruise not faulted
    pub cruise_available: bool,
    /// Longitudinal control engaged
    pub enabled: bool,
    /// Cruise reports standstill
    pub standstill: bool,
    /// Accelerator pedal pressed
    pub gas_pressed: bool,
    /// Vehicle speed
    pub v_ego: f64,
    /// Set speed reported by the vehicle's cruise module
    pub pcm_set_speed: f64,
    /// Cluster speed reported by the vehicle's cruise module
    pub pcm_cluster_speed: f64,
    /// Driver's display units
    pub units: SpeedUnits,
}

/// Owns the set-speed state and applies the configured strategy each tick.
#[derive(Debug, Clone)]
pub struct CruiseArbitrator {
    params: CruiseParams,
    state: CruiseArbitratorState,
    phase: ArbitratorPhase,
}

impl CruiseArbitrator {
    /// Create an arbitrator with an uninitialized set speed.
    pub fn new(params: CruiseParams) -> Self {
        Self {
            params,
            state: CruiseArbitratorState::new(),
            phase: ArbitratorPhase::Uninitialized,
        }
    }

    /// Static configuration.
    pub fn params(&self) -> &CruiseParams {
        &self.params
    }

    /// Current set-speed state.
    pub fn state(&self) -> &CruiseArbitratorState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> ArbitratorPhase {
        self.phase
    }

    /// Advance one tick.
    ///
    /// `events` and `buttons` must come from a debouncer already updated for
    /// this tick.
    ///
    /// # RT Safety
    ///
    /// - No heap allocations
    /// - O(number of events)
    pub fn update(
        &mut self,
        inputs: &CruiseInputs,
        events: &[ButtonEvent],
        buttons: &ButtonTracker,
    ) -> CruiseArbitratorState {
        let before = self.state.set_speed_kph;
        self.state.last_set_speed_kph = before;

        if !inputs.cruise_available {
            self.state.uninitialize();
            self.phase = ArbitratorPhase::Uninitialized;
            return self.state;
        }

        let threshold = self.params.long_press_frames;
        match self.params.strategy {
            CruiseStrategy::PcmNative => {
                self.state.set_speed_kph = inputs.pcm_set_speed * MS_TO_KPH;
                self.state.cluster_speed_kph = inputs.pcm_cluster_speed * MS_TO_KPH;
            }
            CruiseStrategy::Generic => {
                // The sentinel stays until initialize seeds a real speed
                if self.state.is_initialized()
                    && let Some(v) = update_generic(before, inputs, events, buttons, threshold)
                {
                    self.state.set_speed_kph = v;
                }
                self.state.cluster_speed_kph = self.state.set_speed_kph;
            }
            CruiseStrategy::InvertedFamily => {
                if self.state.is_initialized() {
                    let v = update_inverted(before, inputs, events, buttons, threshold);
                    self.state.set_speed_kph = v.min(V_CRUISE_MAX);
                }
                self.state.cluster_speed_kph = self.state.set_speed_kph;
            }
        }

        self.phase = self.phase_for_state();
        if self.params.strategy.is_host_owned()
            && (self.state.set_speed_kph - before).abs() > f64::EPSILON
        {
            tracing::debug!(
                from_kph = before,
                to_kph = self.state.set_speed_kph,
                "cruise set speed changed"
            );
        }
        self.state
    }

    /// Seed the set speed on the tick the system becomes enabled.
    ///
    /// With a qualifying resume button event (accel or resume for generic,
    /// resume only for the inverted family) and a real previous set speed,
    /// the previous speed is restored. Otherwise the set speed is the
    /// rounded vehicle speed clipped to the strategy's seeding range.
    /// PCM-native cruise owns its own initialization and is left untouched.
    pub fn initialize(&mut self, inputs: &CruiseInputs, events: &[ButtonEvent]) {
        let (resumes, seed_floor): (&[ButtonKind], f64) = match self.params.strategy {
            CruiseStrategy::PcmNative => return,
            CruiseStrategy::Generic => {
                (&[ButtonKind::Accel, ButtonKind::Resume], V_CRUISE_ENABLE_MIN)
            }
            CruiseStrategy::InvertedFamily => (&[ButtonKind::Resume], V_CRUISE_DELTA),
        };

        let resumed = events.iter().any(|e| resumes.contains(&e.kind));
        self.state.set_speed_kph = if resumed && self.state.has_real_last() {
            self.state.last_set_speed_kph
        } else {
            (inputs.v_ego * MS_TO_KPH).clamp(seed_floor, V_CRUISE_MAX).round()
        };
        self.state.cluster_speed_kph = self.state.set_speed_kph;
        self.phase = self.phase_for_state();

        tracing::debug!(
            set_speed_kph = self.state.set_speed_kph,
            resumed,
            "cruise set speed initialized"
        );
    }

    /// Return to the fresh-session state.
    pub fn reset(&mut self) {
        self.state = CruiseArbitratorState::new();
        self.phase = ArbitratorPhase::Uninitialized;
    }

    fn phase_for_state(&self) -> ArbitratorPhase {
        match self.params.strategy {
            CruiseStrategy::PcmNative => ArbitratorPhase::TrackingPcm,
            _ if self.state.is_initialized() => ArbitratorPhase::TrackingHost,
            _ => ArbitratorPhase::Uninitialized,
        }
    }
}
