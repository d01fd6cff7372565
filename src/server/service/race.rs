use sea_orm::DatabaseConnection;

use crate::{
    model::race::RaceDto,
    server::{data::race::RaceRepository, error::AppError},
};

/// Message returned whenever a requested race does not exist.
pub const RACE_NOT_FOUND: &str = "Race not found.";

pub struct RaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every race ordered by ID
    pub async fn get_all(&self) -> Result<Vec<RaceDto>, AppError> {
        let races = RaceRepository::new(self.db).get_all().await?;

        Ok(races.into_iter().map(|race| race.into_dto()).collect())
    }

    /// Gets a single race
    ///
    /// # Returns
    /// - `Ok(RaceDto)`: The race
    /// - `Err(AppError::NotFound)`: No race with this ID
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_by_id(&self, race_id: i32) -> Result<RaceDto, AppError> {
        RaceRepository::new(self.db)
            .get_by_id(race_id)
            .await?
            .map(|race| race.into_dto())
            .ok_or_else(|| AppError::NotFound(RACE_NOT_FOUND.to_string()))
    }
}
