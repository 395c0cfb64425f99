//! Power output and efficiency rating formulas.

use std::f64::consts::PI;

/// Air density at sea level (kg/m³).
pub const AIR_DENSITY: f64 = 1.225;

/// Rotor radius (m). Fixed; not a user input.
pub const ROTOR_RADIUS_M: f64 = 10.0;

/// Swept rotor area (m²).
pub fn swept_area() -> f64 {
    PI * ROTOR_RADIUS_M * ROTOR_RADIUS_M
}

/// Computes estimated electrical power output.
///
/// `0.5 · ρ · A · v³ · (η / 100) · cos(θ)`, with the blade angle converted
/// from degrees before the cosine. Inputs are not validated or clamped.
///
/// # Arguments
///
/// * `wind_speed` - Wind speed (m/s)
/// * `blade_angle` - Blade angle (degrees)
/// * `generator_efficiency` - Generator efficiency (percent)
///
/// # Returns
///
/// Power output in watts.
///
/// # Examples
///
/// ```
/// use windmill_sim::model::power::compute_power;
///
/// assert_eq!(compute_power(0.0, 30.0, 85.0), 0.0);
/// let w = compute_power(10.0, 30.0, 85.0);
/// assert!((w - 141_646.39).abs() < 0.01);
/// ```
pub fn compute_power(wind_speed: f64, blade_angle: f64, generator_efficiency: f64) -> f64 {
    0.5 * AIR_DENSITY
        * swept_area()
        * wind_speed.powi(3)
        * (generator_efficiency / 100.0)
        * blade_angle.to_radians().cos()
}

/// Computes the arbitrary-scale efficiency rating.
///
/// `(P / (v · rpm + 1)) · 10`. The `+ 1` keeps the denominator at least one
/// on the non-negative domain.
pub fn compute_efficiency_rating(power_output_watts: f64, wind_speed: f64, rotor_rpm: f64) -> f64 {
    (power_output_watts / (wind_speed * rotor_rpm + 1.0)) * 10.0
}
