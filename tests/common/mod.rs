//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use windmill_sim::model::types::SimulationInput;

/// Control defaults (10 m/s, 30°, 85 %, 150 rpm).
pub fn default_input() -> SimulationInput {
    SimulationInput::default()
}

/// Input that trips the low-wind, overheating and rotor-speed checks.
pub fn triple_warning_input() -> SimulationInput {
    SimulationInput {
        wind_speed: 2.0,
        temperature: 85.0,
        rotor_rpm: 260.0,
        ..SimulationInput::default()
    }
}

/// Expected power for the default input (W).
pub const DEFAULT_POWER_W: f64 = 141_646.394;

/// Expected efficiency rating for the default input.
pub const DEFAULT_RATING: f64 = 943.680;

/// Path of a scenario file shipped with the crate.
pub fn scenario_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(format!("{name}.toml"))
}
