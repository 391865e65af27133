//! Vehicle parameter set and file loading.

use std::path::Path;

use drivecore_cruise::{CruiseParams, EngagementParams};
use drivecore_errors::{ConfigError, DriveCoreError, Result};
use drivecore_filters::SteerTorqueLimits;
use drivecore_lateral::AuthorizationParams;
use drivecore_longitudinal::LongitudinalParams;
use serde::{Deserialize, Serialize};

use crate::presets::load_presets;
use crate::validation::validate_vehicle;

/// Current vehicle parameter schema version.
/// Increment this when `VehicleParams` changes incompatibly.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

const INLINE_SOURCE: &str = "<inline>";

/// Static per-vehicle constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleParams {
    /// Schema version of the serialized form
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,
    /// Vehicle identifier
    pub name: String,
    /// Vehicle mass, kg
    pub mass_kg: f64,
    /// Steering actuator delay, seconds
    pub steer_actuator_delay_s: f64,
    /// Cruise set-speed ownership and long-press threshold
    pub cruise: CruiseParams,
    /// Acceleration bounds and brake ramp step
    #[serde(default)]
    pub longitudinal: LongitudinalParams,
    /// Steering torque limits
    pub steer_limits: SteerTorqueLimits,
    /// Steering authorization gate
    pub authorization: AuthorizationParams,
    /// Engagement options
    #[serde(default)]
    pub engagement: EngagementParams,
}

/// Serialized form of a parameter file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML, `.yaml` or `.yml`
    Yaml,
    /// JSON, `.json`
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(ConfigFormat::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(ConfigFormat::Json)
        } else {
            None
        }
    }
}

impl VehicleParams {
    /// Load a built-in preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] for a name not in the catalog.
    pub fn preset(name: &str) -> Result<Self> {
        let catalog = load_presets()?;
        catalog
            .find(name)
            .cloned()
            .ok_or_else(|| ConfigError::unknown_preset(name).into())
    }

    /// Parse and validate YAML parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::Invalid`] when the parameters break the contract.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Self::parse(source, ConfigFormat::Yaml, INLINE_SOURCE)
    }

    /// Parse and validate JSON parameters.
    ///
    /// # Errors
    ///
    /// Same as [`from_yaml_str`](Self::from_yaml_str).
    pub fn from_json_str(source: &str) -> Result<Self> {
        Self::parse(source, ConfigFormat::Json, INLINE_SOURCE)
    }

    /// Load and validate parameters from a file, format chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] for a missing file,
    /// [`ConfigError::UnsupportedFormat`] for an unknown extension, and the
    /// parse and contract errors of [`from_yaml_str`](Self::from_yaml_str).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default();
            ConfigError::unsupported_format(origin.clone(), ext)
        })?;

        let source = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DriveCoreError::from(ConfigError::not_found(origin.clone()))
            } else {
                DriveCoreError::from(e)
            }
        })?;

        let params = Self::parse(&source, format, &origin)?;
        tracing::info!(vehicle = %params.name, path = %origin, "loaded vehicle parameters");
        Ok(params)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::parse(self.name.clone(), e.to_string()).into())
    }

    /// Check the configuration contract.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first violated constraint.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        validate_vehicle(self)
    }

    fn parse(source: &str, format: ConfigFormat, origin: &str) -> Result<Self> {
        let params: Self = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(source)
                .map_err(|e| ConfigError::parse(origin, e.to_string()))?,
            ConfigFormat::Json => serde_json::from_str(source)
                .map_err(|e| ConfigError::parse(origin, e.to_string()))?,
        };
        params.validate()?;
        Ok(params)
    }
}
