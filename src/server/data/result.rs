use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{data::constructor::ConstructorRepository, model::result::RaceResult};

pub struct ResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResultRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every result of a race with driver and team names resolved
    ///
    /// Drivers are joined in the same query; team names are fetched with a single
    /// batched lookup. Results are returned in storage order (by result ID).
    ///
    /// # Returns
    /// - `Ok(Vec<RaceResult>)`: Results of the race, empty when none are recorded
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_race(&self, race_id: i32) -> Result<Vec<RaceResult>, DbErr> {
        let rows = entity::prelude::RaceResult::find()
            .filter(entity::result::Column::RaceId.eq(race_id))
            .find_also_related(entity::prelude::Driver)
            .order_by_asc(entity::result::Column::Id)
            .all(self.db)
            .await?;

        let teams = ConstructorRepository::new(self.db)
            .get_names_by_ids(rows.iter().map(|(result, _)| result.constructor_id))
            .await?;

        Ok(rows
            .into_iter()
            .map(|(result, driver)| {
                let team = teams.get(&result.constructor_id).cloned();
                RaceResult::from_entity(result, driver, team)
            })
            .collect())
    }
}
