//! Domain model for recorded laps.

use crate::server::model::{driver::DriverName, position::Position};

/// One lap of one driver, with the driver's names when the driver row exists.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverLap {
    pub driver_id: i32,
    pub driver: Option<DriverName>,
    pub lap: i32,
    pub position: Position,
    pub milliseconds: i64,
}

impl DriverLap {
    /// Converts a lap time row and its joined driver at the repository boundary.
    ///
    /// # Arguments
    /// - `lap` - The lap time entity
    /// - `driver` - The driver entity from the join, if the driver exists
    ///
    /// # Returns
    /// - `DriverLap` - The lap with a parsed position
    pub fn from_entity(
        lap: entity::lap_time::Model,
        driver: Option<entity::driver::Model>,
    ) -> Self {
        Self {
            driver_id: lap.driver_id,
            driver: driver.map(DriverName::from_entity),
            lap: lap.lap,
            position: Position::parse(lap.position.as_deref()),
            milliseconds: lap.milliseconds,
        }
    }
}
