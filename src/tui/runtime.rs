//! Dashboard application state.

use crate::config::ScenarioConfig;
use crate::model::types::{PerformanceResult, SimulationInput, Sweeps};
use crate::model::{evaluate, sweeps};
use crate::params::Parameter;

/// Steps applied by a coarse nudge (PgUp/PgDn).
pub const COARSE_STEPS: i32 = 10;

/// TUI application state.
///
/// Owns the current [`SimulationInput`]. Every mutation goes through
/// [`App::recompute`], which rebuilds the result and both sweeps from scratch.
pub struct App {
    /// Current operating parameters.
    pub input: SimulationInput,
    /// Evaluation of `input`.
    pub result: PerformanceResult,
    /// Chart series around `input`.
    pub sweeps: Sweeps,
    /// Index into [`Parameter::ALL`] of the highlighted control.
    pub selected: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// Name of the loaded preset, or `"custom"` after manual edits.
    pub preset_name: String,
}

impl App {
    /// Creates a new app around `input`.
    pub fn new(input: SimulationInput, preset_name: &str) -> Self {
        Self {
            result: evaluate(&input),
            sweeps: sweeps(&input),
            input,
            selected: 0,
            quit: false,
            preset_name: preset_name.to_string(),
        }
    }

    /// Creates a new app from a preset name, falling back to the defaults.
    pub fn from_preset(preset: &str) -> Self {
        match ScenarioConfig::from_preset(preset) {
            Ok(cfg) => Self::new(cfg.input, preset),
            Err(_) => Self::new(SimulationInput::default(), "default"),
        }
    }

    /// Rebuilds every derived value from the current input.
    pub fn recompute(&mut self) {
        self.result = evaluate(&self.input);
        self.sweeps = sweeps(&self.input);
    }

    /// The highlighted control.
    pub fn selected_param(&self) -> Parameter {
        Parameter::ALL[self.selected]
    }

    /// Moves the highlight to the next control, wrapping around.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Parameter::ALL.len();
    }

    /// Moves the highlight to the previous control, wrapping around.
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + Parameter::ALL.len() - 1) % Parameter::ALL.len();
    }

    /// Adjusts the highlighted control by `steps` increments.
    pub fn nudge(&mut self, steps: i32) {
        let before = self.input;
        self.selected_param().nudge(&mut self.input, steps);
        if self.input != before {
            self.preset_name = "custom".to_string();
            self.recompute();
        }
    }

    /// Switches to a different preset.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(cfg) = ScenarioConfig::from_preset(name) else {
            return;
        };
        self.input = cfg.input;
        self.preset_name = name.to_string();
        self.recompute();
    }

    /// Restores every control to its default.
    pub fn reset(&mut self) {
        self.switch_preset("default");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::{Conclusion, Warning};

    #[test]
    fn app_starts_with_evaluated_defaults() {
        let app = App::from_preset("default");
        assert_eq!(app.input, SimulationInput::default());
        assert_eq!(app.result.conclusion, Conclusion::Optimal);
        assert_eq!(app.sweeps.power_vs_wind_speed.len(), 50);
        assert_eq!(app.selected_param(), Parameter::WindSpeed);
    }

    #[test]
    fn unknown_preset_falls_back_to_defaults() {
        let app = App::from_preset("bogus");
        assert_eq!(app.preset_name, "default");
        assert_eq!(app.input, SimulationInput::default());
    }

    #[test]
    fn nudge_recomputes_result() {
        let mut app = App::from_preset("default");
        let before = app.result.power_output_watts;
        app.nudge(1);
        assert_eq!(app.input.wind_speed, 10.5);
        assert!(app.result.power_output_watts > before);
        assert_eq!(app.preset_name, "custom");
    }

    #[test]
    fn nudge_at_bound_is_a_no_op() {
        let mut app = App::from_preset("default");
        app.nudge(COARSE_STEPS * 10);
        assert_eq!(app.input.wind_speed, 25.0);
        app.preset_name = "pinned".to_string();
        app.nudge(1);
        assert_eq!(app.preset_name, "pinned");
    }

    #[test]
    fn selection_wraps() {
        let mut app = App::from_preset("default");
        app.select_prev();
        assert_eq!(app.selected_param(), Parameter::Temperature);
        app.select_next();
        assert_eq!(app.selected_param(), Parameter::WindSpeed);
    }

    #[test]
    fn temperature_nudge_raises_overheating() {
        let mut app = App::from_preset("default");
        while app.selected_param() != Parameter::Temperature {
            app.select_next();
        }
        app.nudge(81);
        assert_eq!(app.result.warnings, vec![Warning::GeneratorOverheating]);
    }

    #[test]
    fn switch_preset_and_reset() {
        let mut app = App::from_preset("default");
        app.switch_preset("calm");
        assert_eq!(app.preset_name, "calm");
        assert_eq!(app.result.conclusion, Conclusion::LowPower);

        app.switch_preset("nonexistent");
        assert_eq!(app.preset_name, "calm");

        app.reset();
        assert_eq!(app.input, SimulationInput::default());
    }
}
