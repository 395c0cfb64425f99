//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{
    ErrorResponse, EvaluationResponse, InputQuery, ParameterRecord, SweepsResponse,
};
use crate::model::types::SimulationInput;
use crate::model::{evaluate, sweeps};
use crate::params::{self, Parameter};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Returns the control catalogue with the server's base values.
///
/// `GET /parameters` → 200 + `Vec<ParameterRecord>` JSON
pub async fn get_parameters(State(state): State<Arc<AppState>>) -> Json<Vec<ParameterRecord>> {
    Json(
        Parameter::ALL
            .into_iter()
            .map(|p| ParameterRecord::new(p, &state.base))
            .collect(),
    )
}

/// Evaluates the model for the queried input.
///
/// `GET /evaluate?wind_speed=12&temperature=85` → 200 + `EvaluationResponse` JSON
/// `GET /evaluate?wind_speed=40` → 400 + `ErrorResponse`
pub async fn get_evaluate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InputQuery>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let input = checked_input(&query, state.base)?;
    let result = evaluate(&input);
    Ok(Json(EvaluationResponse::new(input, &result)))
}

/// Builds both chart series for the queried input.
///
/// `GET /sweeps?blade_angle=15` → 200 + `SweepsResponse` JSON
pub async fn get_sweeps(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InputQuery>,
) -> Result<Json<SweepsResponse>, ApiError> {
    let input = checked_input(&query, state.base)?;
    let s = sweeps(&input);
    Ok(Json(SweepsResponse {
        input,
        power_vs_wind_speed: s.power_vs_wind_speed,
        efficiency_vs_blade_angle: s.efficiency_vs_blade_angle,
    }))
}

/// Merges the query over the base input and checks the control domains.
fn checked_input(query: &InputQuery, base: SimulationInput) -> Result<SimulationInput, ApiError> {
    let input = query.merge(base);
    let errors = params::check_input(&input);
    if errors.is_empty() {
        return Ok(input);
    }
    let error = errors
        .iter()
        .map(|(key, msg)| format!("`{key}` {msg}"))
        .collect::<Vec<_>>()
        .join("; ");
    tracing::debug!(%error, "rejected query");
    Err((StatusCode::BAD_REQUEST, Json(ErrorResponse { error })))
}
