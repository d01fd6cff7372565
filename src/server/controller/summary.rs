use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto, circuit_summary::RaceCircuitSummaryDto,
        constructor_summary::RaceConstructorSummaryDto, driver_summary::RaceDriverSummaryDto,
    },
    server::{
        controller::param, error::AppError, service::summary::RaceSummaryService,
        state::AppState,
    },
};

/// Tag for grouping race summary endpoints in OpenAPI documentation
pub static SUMMARY_TAG: &str = "race_summary";

/// Get the circuit tab summary of a race.
///
/// Returns circuit and race metadata with the fastest laps, per-driver lap times and
/// running positions. Lap collections are empty when no laps were recorded.
///
/// # Returns
/// - `200 OK` - Circuit summary
/// - `400 Bad Request` - Race id is not an integer
/// - `404 Not Found` - No race with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/races/race_circuit_summary/{race_id}",
    tag = SUMMARY_TAG,
    params(
        ("race_id" = i32, Path, description = "Race ID")
    ),
    responses(
        (status = 200, description = "Successfully built circuit summary", body = RaceCircuitSummaryDto),
        (status = 400, description = "Invalid race ID", body = ErrorDto),
        (status = 404, description = "Race not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_race_circuit_summary(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let race_id = param::race_id(path)?;

    let summary = RaceSummaryService::new(&state.db)
        .circuit_summary(race_id)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Get the drivers tab summary of a race.
///
/// Returns the winner, pole sitter, fastest lap and the classification with gap and
/// interval columns. Missing data shows up as `null` fields, never as an error.
///
/// # Returns
/// - `200 OK` - Driver summary
/// - `400 Bad Request` - Race id is not an integer
/// - `404 Not Found` - No race with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/races/race_driver_summary/{race_id}",
    tag = SUMMARY_TAG,
    params(
        ("race_id" = i32, Path, description = "Race ID")
    ),
    responses(
        (status = 200, description = "Successfully built driver summary", body = RaceDriverSummaryDto),
        (status = 400, description = "Invalid race ID", body = ErrorDto),
        (status = 404, description = "Race not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_race_driver_summary(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let race_id = param::race_id(path)?;

    let summary = RaceSummaryService::new(&state.db)
        .driver_summary(race_id)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Get the constructors tab summary of a race.
///
/// # Returns
/// - `200 OK` - Constructor summary
/// - `400 Bad Request` - Race id is not an integer
/// - `404 Not Found` - No race with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/races/race_constructor_summary/{race_id}",
    tag = SUMMARY_TAG,
    params(
        ("race_id" = i32, Path, description = "Race ID")
    ),
    responses(
        (status = 200, description = "Successfully built constructor summary", body = RaceConstructorSummaryDto),
        (status = 400, description = "Invalid race ID", body = ErrorDto),
        (status = 404, description = "Race not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_race_constructor_summary(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let race_id = param::race_id(path)?;

    let summary = RaceSummaryService::new(&state.db)
        .constructor_summary(race_id)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}
