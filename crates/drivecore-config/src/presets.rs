//! Built-in vehicle presets.

use drivecore_errors::{ConfigError, Result, ResultExt, error_context};
use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleParams;

/// YAML source of the built-in presets.
pub const VEHICLE_PRESETS_YAML: &str = include_str!("vehicle_presets.yaml");

const PRESETS_SOURCE: &str = "vehicle_presets.yaml";

/// Named vehicle parameter sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetCatalog {
    /// Presets in declaration order
    pub vehicles: Vec<VehicleParams>,
}

impl PresetCatalog {
    /// Find a preset by name.
    pub fn find(&self, name: &str) -> Option<&VehicleParams> {
        self.vehicles.iter().find(|v| v.name == name)
    }

    /// Preset names, sorted alphabetically.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.vehicles.iter().map(|v| v.name.clone()).collect();
        names.sort_unstable();
        names
    }

    /// Check every preset against the configuration contract.
    ///
    /// # Errors
    ///
    /// Returns the first violation, tagged with the preset name.
    pub fn validate_all(&self) -> Result<()> {
        for vehicle in &self.vehicles {
            vehicle
                .validate()
                .context(error_context!("validate_preset", "vehicle" => vehicle.name.as_str()))?;
        }
        Ok(())
    }
}

/// Parse the built-in preset catalog.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the compiled-in catalog is malformed,
/// or a context-tagged error naming a preset that breaks the contract.
pub fn load_presets() -> Result<PresetCatalog> {
    let catalog: PresetCatalog = serde_yaml::from_str(VEHICLE_PRESETS_YAML)
        .map_err(|e| ConfigError::parse(PRESETS_SOURCE, e.to_string()))?;
    catalog.validate_all()?;
    Ok(catalog)
}

/// Names of all built-in presets, sorted alphabetically.
///
/// # Errors
///
/// Same as [`load_presets`].
pub fn preset_names() -> Result<Vec<String>> {
    Ok(load_presets()?.names())
}
