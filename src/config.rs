//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::types::SimulationInput;
use crate::params;

/// Top-level scenario configuration parsed from TOML.
///
/// Every field has a default matching the dashboard controls. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::from_preset`] for a built-in scenario.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Operating parameters fed to the model.
    #[serde(default)]
    pub input: SimulationInput,
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"input.wind_speed"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ScenarioConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["default", "calm", "gale", "overheat"];

    /// Control defaults: 10 m/s, 30°, 85 %, 150 rpm.
    pub fn nominal() -> Self {
        Self::default()
    }

    /// Light air below the cut-in threshold.
    pub fn calm() -> Self {
        Self {
            input: SimulationInput {
                wind_speed: 2.5,
                ..SimulationInput::default()
            },
        }
    }

    /// Storm conditions past the survival threshold.
    pub fn gale() -> Self {
        Self {
            input: SimulationInput {
                wind_speed: 22.0,
                rotor_rpm: 240.0,
                ..SimulationInput::default()
            },
        }
    }

    /// Hot generator spinning near its speed limit.
    pub fn overheat() -> Self {
        Self {
            input: SimulationInput {
                wind_speed: 14.0,
                rotor_rpm: 260.0,
                runtime_hours: 1_200.0,
                temperature: 92.0,
                ..SimulationInput::default()
            },
        }
    }

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Self::nominal()),
            "calm" => Ok(Self::calm()),
            "gale" => Ok(Self::gale()),
            "overheat" => Ok(Self::overheat()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), "loaded scenario file");
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields against the control domains.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        params::check_input(&self.input)
            .into_iter()
            .map(|(key, message)| ConfigError {
                field: format!("input.{key}"),
                message,
            })
            .collect()
    }
}
