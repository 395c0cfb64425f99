//! Text rendering of evaluation results for terminal output.

use std::fmt;

use crate::model::types::{ChartSeries, Conclusion, PerformanceResult, SimulationInput};

/// Advice line shown under the conclusion heading.
pub fn conclusion_advice(conclusion: Conclusion) -> &'static str {
    match conclusion {
        Conclusion::LowPower => {
            "Windmill is producing low power. Try adjusting the blade angle or wait for higher wind speed."
        }
        Conclusion::HighPower => "High power output! Monitor closely to prevent overload.",
        Conclusion::Optimal => "Windmill operating within optimal range.",
    }
}

/// Performance summary for one evaluation.
pub struct Summary<'a> {
    /// Input that produced `result`.
    pub input: &'a SimulationInput,
    /// Evaluation result.
    pub result: &'a PerformanceResult,
}

impl<'a> Summary<'a> {
    pub fn new(input: &'a SimulationInput, result: &'a PerformanceResult) -> Self {
        Self { input, result }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(f, "--- Windmill Performance Summary ---")?;
        writeln!(f, "Inputs:            {}", self.input)?;
        writeln!(f, "Power output:      {:.2} kW", r.power_output_kw())?;
        writeln!(
            f,
            "Efficiency rating: {:.2} (arbitrary scale)",
            r.efficiency_rating
        )?;
        if r.warnings.is_empty() {
            writeln!(f, "Status:            no warnings")?;
        } else {
            writeln!(f, "Status:")?;
            for w in &r.warnings {
                writeln!(f, "  [{}] {}", w.severity(), w.message())?;
            }
        }
        write!(
            f,
            "Conclusion:        {} - {}",
            r.conclusion,
            conclusion_advice(r.conclusion)
        )
    }
}

/// Two-column table of a chart series.
pub struct SeriesTable<'a>(pub &'a ChartSeries);

impl fmt::Display for SeriesTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "--- {} ---", s.title)?;
        writeln!(f, "{:>18}  {:>18}", s.x_label, s.y_label)?;
        for (x, y) in &s.points {
            writeln!(f, "{x:>18.3}  {y:>18.3}")?;
        }
        Ok(())
    }
}
