//! Integration tests for the performance model and scenario loading.

mod common;

use windmill_sim::config::ScenarioConfig;
use windmill_sim::model::types::{Conclusion, Severity, SimulationInput, Warning};
use windmill_sim::model::{
    classify_conclusion, compute_efficiency_rating, compute_power, evaluate, sweeps,
};

#[test]
fn reference_scenario_matches_expected_values() {
    let r = evaluate(&common::default_input());
    assert!((r.power_output_watts - common::DEFAULT_POWER_W).abs() < 0.01);
    assert!((r.efficiency_rating - common::DEFAULT_RATING).abs() < 0.001);
    assert_eq!(r.conclusion, Conclusion::Optimal);
    assert!(r.warnings.is_empty());
}

#[test]
fn triple_warning_scenario() {
    let r = evaluate(&common::triple_warning_input());
    assert_eq!(
        r.warnings,
        vec![
            Warning::LowWindSpeed,
            Warning::GeneratorOverheating,
            Warning::RotorSpeedLimit,
        ]
    );
    let severities: Vec<Severity> = r.warnings.iter().map(|w| w.severity()).collect();
    assert_eq!(
        severities,
        vec![Severity::Advisory, Severity::Critical, Severity::Advisory]
    );
}

#[test]
fn conclusion_boundaries_are_exact() {
    assert_eq!(classify_conclusion(9_999.0), Conclusion::LowPower);
    assert_eq!(classify_conclusion(10_000.0), Conclusion::Optimal);
    assert_eq!(classify_conclusion(300_000.0), Conclusion::Optimal);
    assert_eq!(classify_conclusion(300_001.0), Conclusion::HighPower);
}

#[test]
fn zero_wind_and_feathered_blades() {
    for angle in [0.0, 15.0, 45.0, 89.0, 90.0] {
        for eff in [50.0, 75.0, 100.0] {
            assert_eq!(compute_power(0.0, angle, eff), 0.0);
        }
    }
    for wind in [1.0, 10.0, 25.0] {
        assert!(compute_power(wind, 90.0, 85.0).abs() < 1e-9);
    }
}

#[test]
fn sweeps_cover_full_domains() {
    let s = sweeps(&common::default_input());
    let wind = &s.power_vs_wind_speed.points;
    let angle = &s.efficiency_vs_blade_angle.points;
    assert_eq!(wind.len(), 50);
    assert_eq!(angle.len(), 50);
    assert_eq!((wind[0].0, wind[49].0), (0.0, 25.0));
    assert_eq!((angle[0].0, angle[49].0), (0.0, 90.0));
    assert!(wind.windows(2).all(|w| w[0].0 < w[1].0));
    assert!(angle.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn determinism_two_identical_runs_produce_identical_results() {
    let input = SimulationInput {
        wind_speed: 7.5,
        blade_angle: 22.0,
        generator_efficiency: 93.0,
        rotor_rpm: 215.0,
        runtime_hours: 10.0,
        temperature: 40.0,
    };
    let (a, b) = (evaluate(&input), evaluate(&input));
    assert_eq!(a.power_output_watts.to_bits(), b.power_output_watts.to_bits());
    assert_eq!(a.efficiency_rating.to_bits(), b.efficiency_rating.to_bits());
    assert_eq!(sweeps(&input), sweeps(&input));

    let p = compute_power(7.5, 22.0, 93.0);
    assert_eq!(p.to_bits(), a.power_output_watts.to_bits());
    assert_eq!(
        compute_efficiency_rating(p, 7.5, 215.0).to_bits(),
        a.efficiency_rating.to_bits()
    );
}

#[test]
fn shipped_scenarios_load_and_classify() {
    let expected = [
        ("default", Conclusion::Optimal, 0),
        ("calm", Conclusion::LowPower, 1),
        ("gale", Conclusion::HighPower, 1),
        ("overheat", Conclusion::HighPower, 2),
    ];
    for (name, conclusion, warning_count) in expected {
        let cfg = ScenarioConfig::from_toml_file(&common::scenario_path(name));
        assert!(cfg.is_ok(), "scenario \"{name}\" should parse: {:?}", cfg.err());
        let cfg = cfg.unwrap_or_default();
        assert!(cfg.validate().is_empty(), "scenario \"{name}\" should be valid");
        assert_eq!(cfg, ScenarioConfig::from_preset(name).unwrap_or_default());

        let r = evaluate(&cfg.input);
        assert_eq!(r.conclusion, conclusion, "scenario \"{name}\"");
        assert_eq!(r.warnings.len(), warning_count, "scenario \"{name}\"");
    }
}
