use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        race::{__path_get_race, __path_get_races, get_race, get_races},
        summary::{
            __path_get_race_circuit_summary, __path_get_race_constructor_summary,
            __path_get_race_driver_summary, get_race_circuit_summary, get_race_constructor_summary, get_race_driver_summary,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Racedash API",
        description = "Read-only race summaries for the race dashboard"
    ),
    tags(
        (name = "race", description = "Race lookups"),
        (name = "race_summary", description = "Circuit, driver and constructor summaries of a race"),
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_races))
        .routes(routes!(get_race_circuit_summary))
        .routes(routes!(get_race_driver_summary))
        .routes(routes!(get_race_constructor_summary))
        .routes(routes!(get_race))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
