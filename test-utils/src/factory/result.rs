//! Race result factory for creating test classifications.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test race results with customizable fields.
///
/// Position, time and milliseconds are raw text like the imported data, so tests
/// can store the `\N` marker or other malformed values directly.
///
/// # Example
///
/// ```rust,ignore
/// let result = ResultFactory::new(&db, race.id, driver.id, team.id)
///     .position("2")
///     .milliseconds(5_401_234)
///     .points(18.0)
///     .build()
///     .await?;
/// ```
pub struct ResultFactory<'a> {
    db: &'a DatabaseConnection,
    race_id: i32,
    driver_id: i32,
    constructor_id: i32,
    grid: Option<i32>,
    position: Option<String>,
    time: Option<String>,
    milliseconds: Option<String>,
    points: Option<f64>,
    laps: Option<i32>,
}

impl<'a> ResultFactory<'a> {
    /// Creates a new ResultFactory with default values.
    ///
    /// Defaults: every optional column is NULL.
    pub fn new(
        db: &'a DatabaseConnection,
        race_id: i32,
        driver_id: i32,
        constructor_id: i32,
    ) -> Self {
        Self {
            db,
            race_id,
            driver_id,
            constructor_id,
            grid: None,
            position: None,
            time: None,
            milliseconds: None,
            points: None,
            laps: None,
        }
    }

    pub fn grid(mut self, grid: i32) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Sets the raw finishing position text, e.g. `"1"` or `"\\N"`.
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets the total race time in milliseconds.
    pub fn milliseconds(mut self, milliseconds: i64) -> Self {
        self.milliseconds = Some(milliseconds.to_string());
        self
    }

    /// Sets the raw total race time text, for malformed values.
    pub fn raw_milliseconds(mut self, milliseconds: impl Into<String>) -> Self {
        self.milliseconds = Some(milliseconds.into());
        self
    }

    pub fn points(mut self, points: f64) -> Self {
        self.points = Some(points);
        self
    }

    pub fn laps(mut self, laps: i32) -> Self {
        self.laps = Some(laps);
        self
    }

    /// Builds and inserts the result into the database.
    pub async fn build(self) -> Result<entity::result::Model, DbErr> {
        entity::result::ActiveModel {
            race_id: ActiveValue::Set(self.race_id),
            driver_id: ActiveValue::Set(self.driver_id),
            constructor_id: ActiveValue::Set(self.constructor_id),
            grid: ActiveValue::Set(self.grid),
            position: ActiveValue::Set(self.position),
            time: ActiveValue::Set(self.time),
            milliseconds: ActiveValue::Set(self.milliseconds),
            points: ActiveValue::Set(self.points),
            laps: ActiveValue::Set(self.laps),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a result with the given finishing position and nothing else.
pub async fn create_result(
    db: &DatabaseConnection,
    race_id: i32,
    driver_id: i32,
    constructor_id: i32,
    position: &str,
) -> Result<entity::result::Model, DbErr> {
    ResultFactory::new(db, race_id, driver_id, constructor_id)
        .position(position)
        .build()
        .await
}
