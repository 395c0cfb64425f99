use std::path::PathBuf;

use clap::Parser;

use windmill_sim::model::types::SimulationInput;
use windmill_sim::params::Parameter;

/// Windmill digital twin: power output and efficiency for one turbine.
///
/// If neither --scenario nor --preset is given, the default preset is used.
#[derive(Debug, Parser)]
#[command(name = "windmill-sim", version)]
pub struct CliOptions {
    /// Load the scenario from a TOML file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,

    /// Use a built-in preset (default, calm, gale, overheat)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Override wind speed (m/s)
    #[arg(long, allow_negative_numbers = true)]
    pub wind_speed: Option<f64>,

    /// Override blade angle (degrees)
    #[arg(long, allow_negative_numbers = true)]
    pub blade_angle: Option<f64>,

    /// Override generator efficiency (%)
    #[arg(long, allow_negative_numbers = true)]
    pub generator_efficiency: Option<f64>,

    /// Override rotor speed (rpm)
    #[arg(long, allow_negative_numbers = true)]
    pub rotor_rpm: Option<f64>,

    /// Override runtime (hours)
    #[arg(long, allow_negative_numbers = true)]
    pub runtime_hours: Option<f64>,

    /// Override generator temperature (°C)
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Print both chart series as tables after the summary
    #[arg(long)]
    pub print_sweeps: bool,

    /// Export both chart series to CSV
    #[arg(long, value_name = "PATH")]
    pub series_out: Option<PathBuf>,

    /// Log at info level (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Open the interactive terminal dashboard
    #[cfg(feature = "tui")]
    #[arg(long)]
    pub tui: bool,

    /// Start the JSON API server after printing the summary
    #[cfg(feature = "api")]
    #[arg(long)]
    pub serve: bool,

    /// API server port
    #[cfg(feature = "api")]
    #[arg(long, default_value_t = 3000)]
    pub port: u16,
}

impl CliOptions {
    /// Preset to load when no scenario file is given.
    pub fn preset_name(&self) -> &str {
        self.preset.as_deref().unwrap_or("default")
    }

    /// Writes every per-parameter flag that was given into `input`.
    pub fn apply_overrides(&self, input: &mut SimulationInput) {
        let overrides = [
            (Parameter::WindSpeed, self.wind_speed),
            (Parameter::BladeAngle, self.blade_angle),
            (Parameter::GeneratorEfficiency, self.generator_efficiency),
            (Parameter::RotorRpm, self.rotor_rpm),
            (Parameter::RuntimeHours, self.runtime_hours),
            (Parameter::Temperature, self.temperature),
        ];
        for (param, value) in overrides {
            if let Some(v) = value {
                param.set(input, v);
            }
        }
    }
}
