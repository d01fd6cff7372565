//! Domain model for race classifications.

use crate::server::{
    model::{driver::DriverName, position::Position},
    util::parse::{parse_optional_int, present_text},
};

/// The result of one driver in one race, with driver and team names resolved.
///
/// Raw text columns are parsed at the repository boundary: the `\N` marker becomes
/// `Position::Unclassified` or `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    pub driver_id: i32,
    pub constructor_id: i32,
    pub driver: Option<DriverName>,
    pub team: Option<String>,
    pub position: Position,
    /// Display time as recorded, e.g. `1:34:15.784` or `+0.807`.
    pub time: Option<String>,
    /// Total race time in milliseconds.
    pub milliseconds: Option<i64>,
    pub points: Option<f64>,
    pub laps: Option<i32>,
}

impl RaceResult {
    /// Converts a result row and its joined names at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The result entity
    /// - `driver` - The driver entity from the join, if the driver exists
    /// - `team` - The constructor name, if the constructor exists
    ///
    /// # Returns
    /// - `RaceResult` - The result with parsed position and time
    pub fn from_entity(
        entity: entity::result::Model,
        driver: Option<entity::driver::Model>,
        team: Option<String>,
    ) -> Self {
        Self {
            driver_id: entity.driver_id,
            constructor_id: entity.constructor_id,
            driver: driver.map(DriverName::from_entity),
            team,
            position: Position::parse(entity.position.as_deref()),
            time: present_text(entity.time),
            milliseconds: parse_optional_int(entity.milliseconds.as_deref()),
            points: entity.points,
            laps: entity.laps,
        }
    }
}

/// Name used when a result references a constructor that does not exist.
pub const UNKNOWN_TEAM: &str = "Unknown";

/// Team name of a result, falling back to [`UNKNOWN_TEAM`].
pub fn team_or_unknown(team: Option<&str>) -> String {
    team.unwrap_or(UNKNOWN_TEAM).to_string()
}
