//! Lap time factory for creating test laps.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lap times with customizable fields.
///
/// The `(race_id, driver_id, lap)` triple is the primary key and must be unique.
///
/// # Example
///
/// ```rust,ignore
/// let lap = LapTimeFactory::new(&db, race.id, driver.id, 12)
///     .milliseconds(91_234)
///     .position("3")
///     .build()
///     .await?;
/// ```
pub struct LapTimeFactory<'a> {
    db: &'a DatabaseConnection,
    race_id: i32,
    driver_id: i32,
    lap: i32,
    position: Option<String>,
    time: Option<String>,
    milliseconds: i64,
}

impl<'a> LapTimeFactory<'a> {
    /// Creates a new LapTimeFactory with default values.
    ///
    /// Defaults:
    /// - position: `"1"`
    /// - time: `None`
    /// - milliseconds: `90000`
    pub fn new(db: &'a DatabaseConnection, race_id: i32, driver_id: i32, lap: i32) -> Self {
        Self {
            db,
            race_id,
            driver_id,
            lap,
            position: Some("1".to_string()),
            time: None,
            milliseconds: 90_000,
        }
    }

    /// Sets the raw running position text, e.g. `"4"` or `"\\N"`.
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Clears the running position (stored as NULL).
    pub fn no_position(mut self) -> Self {
        self.position = None;
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn milliseconds(mut self, milliseconds: i64) -> Self {
        self.milliseconds = milliseconds;
        self
    }

    /// Builds and inserts the lap time into the database.
    pub async fn build(self) -> Result<entity::lap_time::Model, DbErr> {
        entity::lap_time::ActiveModel {
            race_id: ActiveValue::Set(self.race_id),
            driver_id: ActiveValue::Set(self.driver_id),
            lap: ActiveValue::Set(self.lap),
            position: ActiveValue::Set(self.position),
            time: ActiveValue::Set(self.time),
            milliseconds: ActiveValue::Set(self.milliseconds),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lap time with the given lap time in milliseconds.
pub async fn create_lap_time(
    db: &DatabaseConnection,
    race_id: i32,
    driver_id: i32,
    lap: i32,
    milliseconds: i64,
) -> Result<entity::lap_time::Model, DbErr> {
    LapTimeFactory::new(db, race_id, driver_id, lap)
        .milliseconds(milliseconds)
        .build()
        .await
}
