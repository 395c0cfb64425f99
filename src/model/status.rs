//! Threshold classification of operating conditions and power output.

use super::types::{Conclusion, SimulationInput, Warning};

/// Wind speed below which operation is inefficient (m/s).
pub const LOW_WIND_SPEED_MS: f64 = 3.0;
/// Wind speed above which the turbine is at risk (m/s).
pub const HIGH_WIND_SPEED_MS: f64 = 20.0;
/// Generator temperature above which maintenance is needed (°C).
pub const OVERHEAT_TEMPERATURE_C: f64 = 80.0;
/// Rotor speed above which the speed limit is near (rpm).
pub const ROTOR_RPM_LIMIT: f64 = 250.0;
/// Power output below which the turbine is under-producing (W).
pub const LOW_POWER_W: f64 = 10_000.0;
/// Power output above which overload is a concern (W).
pub const HIGH_POWER_W: f64 = 300_000.0;

/// Runs every threshold check against `input`, in a fixed order.
///
/// Checks are independent: each one that holds appends its warning, and none
/// suppresses another. The order is low wind, high wind, overheating, rotor
/// speed.
///
/// # Examples
///
/// ```
/// use windmill_sim::model::status::classify_status;
/// use windmill_sim::model::types::{SimulationInput, Warning};
///
/// let input = SimulationInput { wind_speed: 2.0, ..SimulationInput::default() };
/// assert_eq!(classify_status(&input), vec![Warning::LowWindSpeed]);
/// ```
pub fn classify_status(input: &SimulationInput) -> Vec<Warning> {
    let checks = [
        (input.wind_speed < LOW_WIND_SPEED_MS, Warning::LowWindSpeed),
        (input.wind_speed > HIGH_WIND_SPEED_MS, Warning::HighWindSpeed),
        (
            input.temperature > OVERHEAT_TEMPERATURE_C,
            Warning::GeneratorOverheating,
        ),
        (input.rotor_rpm > ROTOR_RPM_LIMIT, Warning::RotorSpeedLimit),
    ];
    checks
        .into_iter()
        .filter_map(|(fired, warning)| fired.then_some(warning))
        .collect()
}

/// Places a power output in its operating band.
///
/// Both thresholds are exclusive: exactly 10 kW and exactly 300 kW are optimal.
pub fn classify_conclusion(power_output_watts: f64) -> Conclusion {
    if power_output_watts < LOW_POWER_W {
        Conclusion::LowPower
    } else if power_output_watts > HIGH_POWER_W {
        Conclusion::HighPower
    } else {
        Conclusion::Optimal
    }
}
