use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::server::model::lap_time::DriverLap;

pub struct LapTimeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LapTimeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every lap of a race with the driver joined
    ///
    /// Laps are returned in key order: by driver ID, then lap number. Laps without a
    /// driver row are skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<DriverLap>)`: Laps of the race, empty when none are recorded
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_race(&self, race_id: i32) -> Result<Vec<DriverLap>, DbErr> {
        let laps = entity::prelude::LapTime::find()
            .filter(entity::lap_time::Column::RaceId.eq(race_id))
            .find_also_related(entity::prelude::Driver)
            .filter(entity::driver::Column::Id.is_not_null())
            .order_by_asc(entity::lap_time::Column::DriverId)
            .order_by_asc(entity::lap_time::Column::Lap)
            .all(self.db)
            .await?;

        Ok(laps
            .into_iter()
            .map(|(lap, driver)| DriverLap::from_entity(lap, driver))
            .collect())
    }

    /// Gets the fastest laps of a race
    ///
    /// Ordered by lap time ascending. Equal lap times keep key order (driver ID, then
    /// lap number), so ranking is stable. Laps without a driver row are skipped before
    /// the limit applies.
    ///
    /// # Arguments
    /// - `race_id`: Race ID
    /// - `limit`: Maximum number of laps to return
    ///
    /// # Returns
    /// - `Ok(Vec<DriverLap>)`: Up to `limit` laps, fastest first
    /// - `Err(DbErr)`: Database error
    pub async fn get_fastest_by_race(
        &self,
        race_id: i32,
        limit: u64,
    ) -> Result<Vec<DriverLap>, DbErr> {
        let laps = entity::prelude::LapTime::find()
            .filter(entity::lap_time::Column::RaceId.eq(race_id))
            .find_also_related(entity::prelude::Driver)
            .filter(entity::driver::Column::Id.is_not_null())
            .order_by_asc(entity::lap_time::Column::Milliseconds)
            .order_by_asc(entity::lap_time::Column::DriverId)
            .order_by_asc(entity::lap_time::Column::Lap)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(laps
            .into_iter()
            .map(|(lap, driver)| DriverLap::from_entity(lap, driver))
            .collect())
    }
}
