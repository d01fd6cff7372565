use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::race::{Race, RaceWithCircuit};

pub struct RaceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RaceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a race by ID
    ///
    /// # Returns
    /// - `Ok(Some(Race))`: The race
    /// - `Ok(None)`: Race not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Race>, DbErr> {
        let race = entity::prelude::Race::find_by_id(id).one(self.db).await?;

        Ok(race.map(Race::from_entity))
    }

    /// Gets every race ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Race>, DbErr> {
        let races = entity::prelude::Race::find()
            .order_by_asc(entity::race::Column::Id)
            .all(self.db)
            .await?;

        Ok(races.into_iter().map(Race::from_entity).collect())
    }

    /// Gets a race joined with its circuit
    ///
    /// A race whose circuit row is missing is reported as not found, matching an
    /// inner join between the two tables.
    ///
    /// # Returns
    /// - `Ok(Some(RaceWithCircuit))`: Race and circuit metadata
    /// - `Ok(None)`: Race or circuit not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_with_circuit(&self, id: i32) -> Result<Option<RaceWithCircuit>, DbErr> {
        let row = entity::prelude::Race::find_by_id(id)
            .find_also_related(entity::prelude::Circuit)
            .one(self.db)
            .await?;

        Ok(match row {
            Some((race, Some(circuit))) => Some(RaceWithCircuit::from_entity(race, circuit)),
            _ => None,
        })
    }
}
