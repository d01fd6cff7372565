use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{data::constructor::ConstructorRepository, model::qualifying::QualifyingTime};

pub struct QualifyingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QualifyingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every qualifying row of a race with driver and team names resolved
    ///
    /// # Returns
    /// - `Ok(Vec<QualifyingTime>)`: Qualifying rows in storage order
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_race(&self, race_id: i32) -> Result<Vec<QualifyingTime>, DbErr> {
        let rows = entity::prelude::Qualifying::find()
            .filter(entity::qualifying::Column::RaceId.eq(race_id))
            .find_also_related(entity::prelude::Driver)
            .order_by_asc(entity::qualifying::Column::Id)
            .all(self.db)
            .await?;

        let teams = ConstructorRepository::new(self.db)
            .get_names_by_ids(rows.iter().map(|(row, _)| row.constructor_id))
            .await?;

        Ok(rows
            .into_iter()
            .map(|(row, driver)| {
                let team = teams.get(&row.constructor_id).cloned();
                QualifyingTime::from_entity(row, driver, team)
            })
            .collect())
    }
}
