//! Turbine performance model.
//!
//! Every function here is a pure computation over its explicit arguments.
//! Callers recompute from scratch whenever an input changes.

/// Power and efficiency rating formulas.
pub mod power;
/// Threshold checks and operating band.
pub mod status;
pub mod sweep;
pub mod types;

pub use power::{compute_efficiency_rating, compute_power};
pub use status::{classify_conclusion, classify_status};
pub use sweep::{sweep_efficiency_vs_blade_angle, sweep_power_vs_wind_speed};
pub use types::{ChartSeries, Conclusion, PerformanceResult, Severity, SimulationInput, Sweeps, Warning};

/// Evaluates every scalar output for one input.
///
/// # Examples
///
/// ```
/// use windmill_sim::model::{evaluate, Conclusion, SimulationInput};
///
/// let result = evaluate(&SimulationInput::default());
/// assert_eq!(result.conclusion, Conclusion::Optimal);
/// assert!(result.warnings.is_empty());
/// ```
pub fn evaluate(input: &SimulationInput) -> PerformanceResult {
    let power_output_watts = compute_power(
        input.wind_speed,
        input.blade_angle,
        input.generator_efficiency,
    );
    PerformanceResult {
        power_output_watts,
        efficiency_rating: compute_efficiency_rating(
            power_output_watts,
            input.wind_speed,
            input.rotor_rpm,
        ),
        warnings: classify_status(input),
        conclusion: classify_conclusion(power_output_watts),
    }
}

/// Builds both chart series around the current input.
pub fn sweeps(input: &SimulationInput) -> Sweeps {
    Sweeps {
        power_vs_wind_speed: sweep_power_vs_wind_speed(
            input.blade_angle,
            input.generator_efficiency,
        ),
        efficiency_vs_blade_angle: sweep_efficiency_vs_blade_angle(
            input.wind_speed,
            input.generator_efficiency,
            input.rotor_rpm,
        ),
    }
}
