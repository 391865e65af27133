//! Shared scenario harness.

use anyhow::Result;
use drivecore_buttons::ButtonSample;
use drivecore_config::VehicleParams;
use drivecore_cruise::SpeedUnits;
use drivecore_engine::{ControlLoop, ControlOutputs, PlannerOutput, VehicleSnapshot};
use drivecore_lateral::CONTROL_N;
use drivecore_test_helpers::ButtonScript;

/// Drives a control loop with a fixed base snapshot and planner request.
///
/// Each tick copies the base snapshot, applies the tick's button sample and
/// runs the loop with the current planner request.
#[derive(Debug)]
pub struct ScenarioRunner {
    control: ControlLoop,
    units: SpeedUnits,
    base: VehicleSnapshot,
    desired_accel: f64,
    steer_request: f64,
    psis: Vec<f64>,
    curvatures: Vec<f64>,
    curvature_rates: Vec<f64>,
}

impl ScenarioRunner {
    /// Runner for a built-in preset, cruising at `v_ego` with cruise engaged.
    pub fn from_preset(name: &str, v_ego: f64) -> Result<Self> {
        Self::with_params(VehicleParams::preset(name)?, v_ego)
    }

    /// Runner for explicit parameters, cruising at `v_ego` with cruise
    /// engaged.
    pub fn with_params(params: VehicleParams, v_ego: f64) -> Result<Self> {
        let control = ControlLoop::new(params)?;
        tracing::debug!(vehicle = %control.params().name, v_ego, "scenario runner ready");
        Ok(Self {
            control,
            units: SpeedUnits::Metric,
            base: cruising(v_ego),
            desired_accel: 0.0,
            steer_request: 0.0,
            psis: vec![0.0; CONTROL_N],
            curvatures: vec![0.0; CONTROL_N],
            curvature_rates: vec![0.0; CONTROL_N],
        })
    }

    pub fn units(mut self, units: SpeedUnits) -> Self {
        self.units = units;
        self
    }

    pub fn control(&self) -> &ControlLoop {
        &self.control
    }

    /// Base snapshot applied to every tick.
    pub fn base_mut(&mut self) -> &mut VehicleSnapshot {
        &mut self.base
    }

    pub fn set_accel(&mut self, desired_accel: f64) {
        self.desired_accel = desired_accel;
    }

    pub fn set_steer_request(&mut self, steer_request: f64) {
        self.steer_request = steer_request;
    }

    /// Replace the planner horizon. Arrays of the wrong length are passed
    /// through unchanged so the fallback path can be exercised.
    pub fn set_profile(&mut self, psis: &[f64], curvatures: &[f64], curvature_rates: &[f64]) {
        self.psis = psis.to_vec();
        self.curvatures = curvatures.to_vec();
        self.curvature_rates = curvature_rates.to_vec();
    }

    /// One tick with the given button sample.
    pub fn tick_with(&mut self, buttons: ButtonSample) -> ControlOutputs {
        let snapshot = VehicleSnapshot {
            buttons,
            ..self.base
        };
        let plan = PlannerOutput {
            desired_accel: self.desired_accel,
            psis: &self.psis,
            curvatures: &self.curvatures,
            curvature_rates: &self.curvature_rates,
            steer_request: self.steer_request,
        };
        self.control.tick(&snapshot, &plan, self.units)
    }

    /// One tick with every button released.
    pub fn tick(&mut self) -> ControlOutputs {
        self.tick_with(ButtonSample::released())
    }

    /// Run `ticks` ticks with every button released.
    pub fn idle(&mut self, ticks: usize) -> Vec<ControlOutputs> {
        (0..ticks).map(|_| self.tick()).collect()
    }

    /// Run a button script, one tick per sample.
    pub fn run_script(&mut self, script: &ButtonScript) -> Vec<ControlOutputs> {
        script.iter().map(|sample| self.tick_with(*sample)).collect()
    }
}

/// Snapshot of a vehicle cruising at `v_ego` with cruise available and
/// engaged and every button released.
pub fn cruising(v_ego: f64) -> VehicleSnapshot {
    VehicleSnapshot {
        buttons: ButtonSample::released(),
        cruise_available: true,
        cruise_enabled: true,
        v_ego,
        v_ego_raw: v_ego,
        engine_torque: 60.0,
        engine_rpm: 1800.0,
        ..VehicleSnapshot::default()
    }
}

/// Set speeds of a run of outputs.
pub fn set_speeds(outputs: &[ControlOutputs]) -> Vec<f64> {
    outputs.iter().map(|o| o.set_speed_kph).collect()
}

/// Brake targets of a run of outputs; `None` for torque ticks.
pub fn brakes(outputs: &[ControlOutputs]) -> Vec<Option<f64>> {
    outputs.iter().map(ControlOutputs::brake).collect()
}
