//! Single wind turbine performance simulator.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod io;
/// Power, efficiency, status and sweep computations.
pub mod model;
pub mod params;
pub mod report;
#[cfg(feature = "tui")]
pub mod tui;
