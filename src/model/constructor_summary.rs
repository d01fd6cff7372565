use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload of the constructors tab.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RaceConstructorSummaryDto {
    pub best_finisher: Option<BestFinisherDto>,
    pub most_points: Option<MostPointsDto>,
    pub results: Vec<ConstructorResultDto>,
    pub driver_points: Vec<DriverPointsDto>,
    /// Ordered by lap then team name.
    pub position_evolution: Vec<ConstructorLapPositionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BestFinisherDto {
    pub team: String,
    pub position: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MostPointsDto {
    pub team: String,
    pub points: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConstructorResultDto {
    pub team: String,
    /// Driver full names joined with `", "`.
    pub drivers: String,
    pub best_position: Option<i32>,
    pub avg_position: Option<f64>,
    pub total_points: f64,
    pub laps_completed: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DriverPointsDto {
    pub constructor: String,
    pub driver: String,
    pub points: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConstructorLapPositionDto {
    pub team: String,
    pub lap: i32,
    pub position: f64,
}
