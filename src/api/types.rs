//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::model::types::{
    ChartSeries, Conclusion, PerformanceResult, Severity, SimulationInput, Warning,
};
use crate::params::{ParamSpec, Parameter};

/// One evaluation: echoed input plus every scalar output.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    /// Input actually evaluated (query merged over the base scenario).
    pub input: SimulationInput,
    /// Power output (W).
    pub power_output_watts: f64,
    /// Power output (kW).
    pub power_output_kw: f64,
    /// Arbitrary-scale efficiency rating.
    pub efficiency_rating: f64,
    /// Fired checks in check order.
    pub warnings: Vec<WarningRecord>,
    /// Operating band.
    pub conclusion: Conclusion,
}

impl EvaluationResponse {
    pub fn new(input: SimulationInput, result: &PerformanceResult) -> Self {
        Self {
            input,
            power_output_watts: result.power_output_watts,
            power_output_kw: result.power_output_kw(),
            efficiency_rating: result.efficiency_rating,
            warnings: result.warnings.iter().copied().map(WarningRecord::from).collect(),
            conclusion: result.conclusion,
        }
    }
}

/// A status message flattened for JSON clients.
#[derive(Debug, Serialize)]
pub struct WarningRecord {
    /// Check identifier, e.g. `"low_wind_speed"`.
    pub kind: Warning,
    /// `"advisory"` or `"critical"`.
    pub severity: Severity,
    /// Plain message text.
    pub message: &'static str,
}

impl From<Warning> for WarningRecord {
    fn from(w: Warning) -> Self {
        Self {
            kind: w,
            severity: w.severity(),
            message: w.message(),
        }
    }
}

/// Both chart series for one input.
#[derive(Debug, Serialize)]
pub struct SweepsResponse {
    /// Input the sweeps were built around.
    pub input: SimulationInput,
    /// Power output (kW) against wind speed.
    pub power_vs_wind_speed: ChartSeries,
    /// Efficiency rating against blade angle.
    pub efficiency_vs_blade_angle: ChartSeries,
}

/// Parameter catalogue entry with the server's base value.
#[derive(Debug, Serialize)]
pub struct ParameterRecord {
    #[serde(flatten)]
    pub spec: ParamSpec,
    /// Value used when a query omits this parameter.
    pub base_value: f64,
}

impl ParameterRecord {
    pub fn new(param: Parameter, base: &SimulationInput) -> Self {
        Self {
            spec: param.spec(),
            base_value: param.get(base),
        }
    }
}

/// Optional overrides for each operating parameter.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputQuery {
    pub wind_speed: Option<f64>,
    pub blade_angle: Option<f64>,
    pub generator_efficiency: Option<f64>,
    pub rotor_rpm: Option<f64>,
    pub runtime_hours: Option<f64>,
    pub temperature: Option<f64>,
}

impl InputQuery {
    /// Applies the supplied fields over `base`.
    pub fn merge(&self, base: SimulationInput) -> SimulationInput {
        SimulationInput {
            wind_speed: self.wind_speed.unwrap_or(base.wind_speed),
            blade_angle: self.blade_angle.unwrap_or(base.blade_angle),
            generator_efficiency: self
                .generator_efficiency
                .unwrap_or(base.generator_efficiency),
            rotor_rpm: self.rotor_rpm.unwrap_or(base.rotor_rpm),
            runtime_hours: self.runtime_hours.unwrap_or(base.runtime_hours),
            temperature: self.temperature.unwrap_or(base.temperature),
        }
    }
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
