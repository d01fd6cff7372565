use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload of the circuit tab: race metadata plus lap-level datasets.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RaceCircuitSummaryDto {
    pub circuit_name: String,
    pub location: Option<String>,
    pub race_name: String,
    pub year: i32,
    pub fastest_lap: CircuitFastestLapDto,
    pub fastest_laps_per_driver: Vec<DriverFastestLapDto>,
    pub winner_position_changes: Vec<LapPositionDto>,
    pub fastest_lap_timeline: Vec<LapMillisecondsDto>,
    /// At most 20 laps, fastest first; `position` is the 1-based rank.
    pub top_fastest_laps: Vec<TopFastestLapDto>,
    /// Every lap, ordered by driver full name then lap.
    pub pace_evolution: Vec<DriverLapTimeDto>,
    pub pace_candlestick: Vec<PaceCandlestickDto>,
    /// Every lap, ordered by driver full name then lap.
    pub position_evolution: Vec<DriverLapPositionDto>,
}

/// Fastest single lap of the race. `time` is `"N/A"` when no laps were recorded.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CircuitFastestLapDto {
    pub time: String,
    pub driver: Option<String>,
    pub lap: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DriverFastestLapDto {
    pub driver: String,
    pub milliseconds: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LapPositionDto {
    pub lap: i32,
    pub position: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LapMillisecondsDto {
    pub lap: i32,
    pub milliseconds: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TopFastestLapDto {
    pub position: u32,
    /// Driver surname.
    pub driver: String,
    pub lap: i32,
    pub milliseconds: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DriverLapTimeDto {
    pub driver: String,
    pub lap: i32,
    pub milliseconds: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaceCandlestickDto {
    pub driver: String,
    pub min: i64,
    pub avg: f64,
    pub max: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DriverLapPositionDto {
    pub driver: String,
    pub lap: i32,
    pub position: Option<i32>,
}
