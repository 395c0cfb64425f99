//! Windmill simulator entry point: CLI wiring and config-driven evaluation.

mod cli;

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::CliOptions;
use windmill_sim::config::ScenarioConfig;
use windmill_sim::io::export::export_csv;
use windmill_sim::model::{evaluate, sweeps};
use windmill_sim::report::{SeriesTable, Summary};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Loads the scenario: --scenario takes priority, then --preset, then the default preset.
fn load_scenario(cli: &CliOptions) -> ScenarioConfig {
    let loaded = match cli.scenario {
        Some(ref path) => ScenarioConfig::from_toml_file(path),
        None => ScenarioConfig::from_preset(cli.preset_name()),
    };
    match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = CliOptions::parse();
    init_logging(cli.verbose);

    let mut scenario = load_scenario(&cli);
    cli.apply_overrides(&mut scenario.input);

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    tracing::info!(input = %scenario.input, "scenario ready");

    #[cfg(feature = "tui")]
    if cli.tui {
        let label = if cli.scenario.is_some() {
            "scenario"
        } else {
            cli.preset_name()
        };
        if let Err(e) = windmill_sim::tui::run(scenario.input, label) {
            eprintln!("error: dashboard failed: {e}");
            process::exit(1);
        }
        return;
    }

    let result = evaluate(&scenario.input);
    println!("{}", Summary::new(&scenario.input, &result));

    let series = sweeps(&scenario.input);
    if cli.print_sweeps {
        println!("\n{}", SeriesTable(&series.power_vs_wind_speed));
        println!("{}", SeriesTable(&series.efficiency_vs_blade_angle));
    }

    if let Some(ref path) = cli.series_out {
        if let Err(e) = export_csv(&series, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Chart series written to {}", path.display());
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(windmill_sim::api::AppState {
            base: scenario.input,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(windmill_sim::api::serve(state, addr)) {
            eprintln!("error: API server failed: {e}");
            process::exit(1);
        }
    }
}
