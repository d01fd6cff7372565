use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload of the drivers tab.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RaceDriverSummaryDto {
    pub race_winner: Option<RaceWinnerDto>,
    pub pole_position: Option<PolePositionDto>,
    pub fastest_lap: Option<DriverFastestLapDetailDto>,
    /// Ordered by total race time; drivers without a time come last.
    pub results: Vec<DriverResultRowDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RaceWinnerDto {
    pub driver: String,
    pub team: String,
    pub time: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PolePositionDto {
    pub driver: String,
    pub team: String,
    pub time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DriverFastestLapDetailDto {
    pub driver: String,
    /// Team from the driver's race result; `None` when the driver has no result row.
    pub team: Option<String>,
    pub lap: i32,
    /// `M:SS.mmm`
    pub time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DriverResultRowDto {
    pub position: Option<i32>,
    pub driver: String,
    pub team: String,
    pub time: Option<String>,
    /// `+S.mmms` behind the winner; empty for the winner or when a time is missing.
    pub gap: String,
    /// Running sum of the gaps so far in this ordering, formatted like `gap`.
    pub interval: String,
    pub points: Option<f64>,
    pub laps: Option<i32>,
}
