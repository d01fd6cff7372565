//! Race factory for creating test races.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test races with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let race = RaceFactory::new(&db, circuit.id)
///     .name("British Grand Prix")
///     .year(2009)
///     .build()
///     .await?;
/// ```
pub struct RaceFactory<'a> {
    db: &'a DatabaseConnection,
    circuit_id: i32,
    year: i32,
    round: i32,
    name: String,
    date: Option<NaiveDate>,
    url: Option<String>,
}

impl<'a> RaceFactory<'a> {
    /// Creates a new RaceFactory with default values.
    ///
    /// Defaults:
    /// - year: `2009`
    /// - round: `1`
    /// - name: `"Grand Prix {id}"`
    /// - date, url: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    /// - `circuit_id` - ID of the circuit hosting the race
    pub fn new(db: &'a DatabaseConnection, circuit_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            circuit_id,
            year: 2009,
            round: 1,
            name: format!("Grand Prix {}", id),
            date: None,
            url: None,
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn round(mut self, round: i32) -> Self {
        self.round = round;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builds and inserts the race into the database.
    ///
    /// # Returns
    /// - `Ok(entity::race::Model)` - Created race
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::race::Model, DbErr> {
        entity::race::ActiveModel {
            year: ActiveValue::Set(self.year),
            round: ActiveValue::Set(self.round),
            circuit_id: ActiveValue::Set(self.circuit_id),
            name: ActiveValue::Set(self.name),
            date: ActiveValue::Set(self.date),
            url: ActiveValue::Set(self.url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a race with default values at the given circuit.
pub async fn create_race(
    db: &DatabaseConnection,
    circuit_id: i32,
) -> Result<entity::race::Model, DbErr> {
    RaceFactory::new(db, circuit_id).build().await
}
