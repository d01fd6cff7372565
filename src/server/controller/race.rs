use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, race::RaceDto},
    server::{
        controller::param, error::AppError, service::race::RaceService, state::AppState,
    },
};

/// Tag for grouping race endpoints in OpenAPI documentation
pub static RACE_TAG: &str = "race";

/// List every race.
///
/// # Returns
/// - `200 OK` - All races ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/races",
    tag = RACE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved races", body = Vec<RaceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_races(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let races = RaceService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(races)))
}

/// Get a single race.
///
/// # Returns
/// - `200 OK` - The race
/// - `400 Bad Request` - Race id is not an integer
/// - `404 Not Found` - No race with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/races/{race_id}",
    tag = RACE_TAG,
    params(
        ("race_id" = i32, Path, description = "Race ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved race", body = RaceDto),
        (status = 400, description = "Invalid race ID", body = ErrorDto),
        (status = 404, description = "Race not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_race(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let race_id = param::race_id(path)?;

    let race = RaceService::new(&state.db).get_by_id(race_id).await?;

    Ok((StatusCode::OK, Json(race)))
}
