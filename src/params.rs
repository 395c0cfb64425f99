//! Input controls: labels, domains, defaults and step sizes.
//!
//! The model accepts any real number. Every surface that collects input
//! (scenario files, CLI flags, the dashboard, the API) checks and steps values
//! through this catalogue instead.

use serde::Serialize;

use crate::model::types::SimulationInput;

/// Static description of one input control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    /// Field name in [`SimulationInput`] and in TOML/query strings.
    pub key: &'static str,
    /// Human-readable label including the unit.
    pub label: &'static str,
    /// Short unit suffix for compact display.
    pub unit: &'static str,
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive); `None` when unbounded.
    pub max: Option<f64>,
    /// Initial value.
    pub default: f64,
    /// Increment for one nudge.
    pub step: f64,
}

/// The six operating parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    WindSpeed,
    BladeAngle,
    GeneratorEfficiency,
    RotorRpm,
    RuntimeHours,
    Temperature,
}

impl Parameter {
    /// All parameters in control order.
    pub const ALL: [Parameter; 6] = [
        Parameter::WindSpeed,
        Parameter::BladeAngle,
        Parameter::GeneratorEfficiency,
        Parameter::RotorRpm,
        Parameter::RuntimeHours,
        Parameter::Temperature,
    ];

    /// Returns the control description.
    pub fn spec(self) -> ParamSpec {
        match self {
            Self::WindSpeed => ParamSpec {
                key: "wind_speed",
                label: "Wind Speed (m/s)",
                unit: "m/s",
                min: 0.0,
                max: Some(25.0),
                default: 10.0,
                step: 0.5,
            },
            Self::BladeAngle => ParamSpec {
                key: "blade_angle",
                label: "Blade Angle (degrees)",
                unit: "°",
                min: 0.0,
                max: Some(90.0),
                default: 30.0,
                step: 1.0,
            },
            Self::GeneratorEfficiency => ParamSpec {
                key: "generator_efficiency",
                label: "Generator Efficiency (%)",
                unit: "%",
                min: 50.0,
                max: Some(100.0),
                default: 85.0,
                step: 1.0,
            },
            Self::RotorRpm => ParamSpec {
                key: "rotor_rpm",
                label: "Rotor RPM",
                unit: "rpm",
                min: 0.0,
                max: Some(300.0),
                default: 150.0,
                step: 5.0,
            },
            Self::RuntimeHours => ParamSpec {
                key: "runtime_hours",
                label: "Runtime (hours)",
                unit: "h",
                min: 0.0,
                max: None,
                default: 0.0,
                step: 1.0,
            },
            Self::Temperature => ParamSpec {
                key: "temperature",
                label: "Generator Temperature (°C)",
                unit: "°C",
                min: 0.0,
                max: None,
                default: 0.0,
                step: 1.0,
            },
        }
    }

    /// Looks up a parameter by its field name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.spec().key == key)
    }

    /// Reads this parameter from `input`.
    pub fn get(self, input: &SimulationInput) -> f64 {
        match self {
            Self::WindSpeed => input.wind_speed,
            Self::BladeAngle => input.blade_angle,
            Self::GeneratorEfficiency => input.generator_efficiency,
            Self::RotorRpm => input.rotor_rpm,
            Self::RuntimeHours => input.runtime_hours,
            Self::Temperature => input.temperature,
        }
    }

    /// Writes `value` into `input` as-is.
    pub fn set(self, input: &mut SimulationInput, value: f64) {
        let slot = match self {
            Self::WindSpeed => &mut input.wind_speed,
            Self::BladeAngle => &mut input.blade_angle,
            Self::GeneratorEfficiency => &mut input.generator_efficiency,
            Self::RotorRpm => &mut input.rotor_rpm,
            Self::RuntimeHours => &mut input.runtime_hours,
            Self::Temperature => &mut input.temperature,
        };
        *slot = value;
    }

    /// Clamps `value` into the control domain.
    pub fn clamp(self, value: f64) -> f64 {
        let spec = self.spec();
        let lo = value.max(spec.min);
        spec.max.map_or(lo, |hi| lo.min(hi))
    }

    /// Moves the parameter by `steps` increments, staying inside the domain.
    pub fn nudge(self, input: &mut SimulationInput, steps: i32) {
        let spec = self.spec();
        let next = self.get(input) + spec.step * f64::from(steps);
        self.set(input, self.clamp(next));
    }

    /// Checks that `value` is finite and inside the control domain.
    ///
    /// # Errors
    ///
    /// Returns a description of the violated bound.
    pub fn check(self, value: f64) -> Result<(), String> {
        let spec = self.spec();
        if !value.is_finite() {
            return Err(format!("must be a finite number, got {value}"));
        }
        match spec.max {
            Some(max) if !(spec.min..=max).contains(&value) => Err(format!(
                "must be in [{}, {}], got {value}",
                spec.min, max
            )),
            None if value < spec.min => Err(format!("must be >= {}, got {value}", spec.min)),
            _ => Ok(()),
        }
    }
}

/// Checks every field of `input`, returning `(key, message)` per violation.
pub fn check_input(input: &SimulationInput) -> Vec<(&'static str, String)> {
    Parameter::ALL
        .into_iter()
        .filter_map(|p| p.check(p.get(input)).err().map(|msg| (p.spec().key, msg)))
        .collect()
}
