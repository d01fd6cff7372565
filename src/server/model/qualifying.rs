//! Domain model for qualifying sessions.

use crate::server::{
    model::driver::DriverName,
    util::parse::{parse_lap_time, present_text},
};

/// The Q3 time set by one driver.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifyingTime {
    pub driver_id: i32,
    pub driver: Option<DriverName>,
    pub team: Option<String>,
    /// Q3 time as recorded, e.g. `1:26.202`.
    pub q3: Option<String>,
}

impl QualifyingTime {
    pub fn from_entity(
        entity: entity::qualifying::Model,
        driver: Option<entity::driver::Model>,
        team: Option<String>,
    ) -> Self {
        Self {
            driver_id: entity.driver_id,
            driver: driver.map(DriverName::from_entity),
            team,
            q3: present_text(entity.q3),
        }
    }

    /// The Q3 time in milliseconds, when recorded and well formed.
    pub fn q3_milliseconds(&self) -> Option<i64> {
        self.q3.as_deref().and_then(parse_lap_time)
    }
}
