//! Derived chart series: one input swept across its domain.

use super::power::{compute_efficiency_rating, compute_power};
use super::types::ChartSeries;

/// Number of samples in every sweep.
pub const SWEEP_POINTS: usize = 50;

/// Wind speed sweep range (m/s), inclusive.
pub const WIND_SPEED_RANGE: (f64, f64) = (0.0, 25.0);

/// Blade angle sweep range (degrees), inclusive.
pub const BLADE_ANGLE_RANGE: (f64, f64) = (0.0, 90.0);

/// Returns `n` evenly spaced samples over `[start, end]`.
///
/// The first sample is `start` and the last is exactly `end`. `n == 1`
/// yields `[start]`; `n == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Power output (kW) against wind speed over [0, 25] m/s.
///
/// Blade angle and generator efficiency are held at the given values.
pub fn sweep_power_vs_wind_speed(blade_angle: f64, generator_efficiency: f64) -> ChartSeries {
    let (lo, hi) = WIND_SPEED_RANGE;
    let points = linspace(lo, hi, SWEEP_POINTS)
        .into_iter()
        .map(|v| (v, compute_power(v, blade_angle, generator_efficiency) / 1000.0))
        .collect();
    ChartSeries {
        title: "Power Output vs Wind Speed",
        x_label: "Wind Speed (m/s)",
        y_label: "Power Output (kW)",
        points,
    }
}

/// Efficiency rating against blade angle over [0, 90] degrees.
///
/// Wind speed, generator efficiency and rotor speed are held at the given
/// values.
pub fn sweep_efficiency_vs_blade_angle(
    wind_speed: f64,
    generator_efficiency: f64,
    rotor_rpm: f64,
) -> ChartSeries {
    let (lo, hi) = BLADE_ANGLE_RANGE;
    let points = linspace(lo, hi, SWEEP_POINTS)
        .into_iter()
        .map(|angle| {
            let watts = compute_power(wind_speed, angle, generator_efficiency);
            (angle, compute_efficiency_rating(watts, wind_speed, rotor_rpm))
        })
        .collect();
    ChartSeries {
        title: "Efficiency Rating vs Blade Angle",
        x_label: "Blade Angle (°)",
        y_label: "Efficiency Rating",
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_endpoints() {
        let xs = linspace(0.0, 25.0, 50);
        assert_eq!(xs.len(), 50);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[49], 25.0);
        assert!((xs[1] - 25.0 / 49.0).abs() < 1e-12);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(3.0, 9.0, 2), vec![3.0, 9.0]);
    }

    #[test]
    fn wind_sweep_shape() {
        let s = sweep_power_vs_wind_speed(30.0, 85.0);
        assert_eq!(s.len(), SWEEP_POINTS);
        assert_eq!(s.points[0].0, 0.0);
        assert_eq!(s.points[SWEEP_POINTS - 1].0, 25.0);
        assert!(s.points.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(s.points[0].1, 0.0);
        assert_eq!(s.x_label, "Wind Speed (m/s)");
        assert_eq!(s.y_label, "Power Output (kW)");
    }

    #[test]
    fn wind_sweep_is_in_kilowatts() {
        let s = sweep_power_vs_wind_speed(30.0, 85.0);
        let (v, kw) = s.points[SWEEP_POINTS - 1];
        assert!((kw - compute_power(v, 30.0, 85.0) / 1000.0).abs() < 1e-9);
    }

    #[test]
    fn angle_sweep_shape() {
        let s = sweep_efficiency_vs_blade_angle(10.0, 85.0, 150.0);
        assert_eq!(s.len(), SWEEP_POINTS);
        assert_eq!(s.points[0].0, 0.0);
        assert_eq!(s.points[SWEEP_POINTS - 1].0, 90.0);
        assert!(s.points.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(s.x_label, "Blade Angle (°)");
        assert_eq!(s.y_label, "Efficiency Rating");
    }

    #[test]
    fn angle_sweep_decreases_towards_feathered() {
        let s = sweep_efficiency_vs_blade_angle(10.0, 85.0, 150.0);
        assert!(s.points.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(s.points[SWEEP_POINTS - 1].1.abs() < 1e-9);
    }

    #[test]
    fn angle_sweep_matches_point_evaluation() {
        let s = sweep_efficiency_vs_blade_angle(12.0, 90.0, 200.0);
        let (angle, rating) = s.points[17];
        let expected = compute_efficiency_rating(compute_power(12.0, angle, 90.0), 12.0, 200.0);
        assert_eq!(rating.to_bits(), expected.to_bits());
    }
}
