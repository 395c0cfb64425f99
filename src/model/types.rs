//! Core model types: operating inputs, evaluation results, and chart series.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating parameters for one evaluation of the turbine model.
///
/// Values are taken as supplied. Domain checks belong to whichever surface
/// collected them (see [`crate::params::Parameter::check`]).
///
/// # Examples
///
/// ```
/// use windmill_sim::model::types::SimulationInput;
///
/// let input = SimulationInput::default();
/// assert_eq!(input.wind_speed, 10.0);
/// assert_eq!(input.rotor_rpm, 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationInput {
    /// Free-stream wind speed (m/s).
    pub wind_speed: f64,
    /// Blade pitch angle (degrees).
    pub blade_angle: f64,
    /// Generator efficiency (percent).
    pub generator_efficiency: f64,
    /// Rotor speed (revolutions per minute).
    pub rotor_rpm: f64,
    /// Accumulated runtime (hours). Carried through but never used in a formula.
    pub runtime_hours: f64,
    /// Generator temperature (°C). Only feeds the overheating check.
    pub temperature: f64,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            wind_speed: 10.0,
            blade_angle: 30.0,
            generator_efficiency: 85.0,
            rotor_rpm: 150.0,
            runtime_hours: 0.0,
            temperature: 0.0,
        }
    }
}

impl fmt::Display for SimulationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wind={:.1} m/s  blade={:.1}°  eff={:.0}%  rotor={:.0} rpm  runtime={:.0} h  temp={:.1} °C",
            self.wind_speed,
            self.blade_angle,
            self.generator_efficiency,
            self.rotor_rpm,
            self.runtime_hours,
            self.temperature,
        )
    }
}

/// How urgently a status message should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Caution; operation continues.
    Advisory,
    /// Urgent action implied.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advisory => f.write_str("ADVISORY"),
            Self::Critical => f.write_str("CRITICAL"),
        }
    }
}

/// A threshold check that fired during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    /// Wind speed below the cut-in threshold.
    LowWindSpeed,
    /// Wind speed above the survival threshold.
    HighWindSpeed,
    /// Generator temperature above the overheating threshold.
    GeneratorOverheating,
    /// Rotor speed approaching its mechanical limit.
    RotorSpeedLimit,
}

impl Warning {
    /// Severity attached to this check. Fixed per check.
    pub fn severity(self) -> Severity {
        match self {
            Self::LowWindSpeed | Self::RotorSpeedLimit => Severity::Advisory,
            Self::HighWindSpeed | Self::GeneratorOverheating => Severity::Critical,
        }
    }

    /// Plain message text, without any display decoration.
    pub fn message(self) -> &'static str {
        match self {
            Self::LowWindSpeed => "wind speed too low for efficient operation",
            Self::HighWindSpeed => "high wind speed, risk of turbine failure",
            Self::GeneratorOverheating => "generator overheating, immediate maintenance needed",
            Self::RotorSpeedLimit => "rotor RPM approaching critical speed limit",
        }
    }
}

/// Overall operating band derived from power output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Conclusion {
    /// Output below the low-power threshold.
    LowPower,
    /// Output above the overload threshold.
    HighPower,
    /// Output between the two thresholds (inclusive).
    Optimal,
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowPower => f.write_str("LOW_POWER"),
            Self::HighPower => f.write_str("HIGH_POWER"),
            Self::Optimal => f.write_str("OPTIMAL"),
        }
    }
}

/// Everything derived from a single [`SimulationInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceResult {
    /// Estimated electrical output (W).
    pub power_output_watts: f64,
    /// Arbitrary-scale rating combining power, wind speed and rotor speed.
    pub efficiency_rating: f64,
    /// Fired checks, in check order.
    pub warnings: Vec<Warning>,
    /// Operating band.
    pub conclusion: Conclusion,
}

impl PerformanceResult {
    /// Power output in kilowatts, the unit used for display.
    pub fn power_output_kw(&self) -> f64 {
        self.power_output_watts / 1000.0
    }

    /// Returns `true` if any fired check is critical.
    pub fn has_critical(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.severity() == Severity::Critical)
    }
}

/// One chart line: a sweep of one input with the others held fixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Chart title.
    pub title: &'static str,
    /// X axis label.
    pub x_label: &'static str,
    /// Y axis label.
    pub y_label: &'static str,
    /// Samples in ascending `x` order.
    pub points: Vec<(f64, f64)>,
}

impl ChartSeries {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `(min, max)` of the y values, or `None` for an empty series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut ys = self.points.iter().map(|&(_, y)| y);
        let first = ys.next()?;
        Some(ys.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

/// Both chart series for the current input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sweeps {
    /// Power output (kW) against wind speed.
    pub power_vs_wind_speed: ChartSeries,
    /// Efficiency rating against blade angle.
    pub efficiency_vs_blade_angle: ChartSeries,
}
