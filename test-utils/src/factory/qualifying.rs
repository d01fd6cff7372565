//! Qualifying factory for creating test qualifying rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test qualifying rows with customizable fields.
pub struct QualifyingFactory<'a> {
    db: &'a DatabaseConnection,
    race_id: i32,
    driver_id: i32,
    constructor_id: i32,
    position: Option<i32>,
    q1: Option<String>,
    q2: Option<String>,
    q3: Option<String>,
}

impl<'a> QualifyingFactory<'a> {
    /// Creates a new QualifyingFactory with every session time unset.
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
            position: None,
            q1: None,
            q2: None,
            q3: None,
        }
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn q1(mut self, q1: impl Into<String>) -> Self {
        self.q1 = Some(q1.into());
        self
    }

    pub fn q2(mut self, q2: impl Into<String>) -> Self {
        self.q2 = Some(q2.into());
        self
    }

    pub fn q3(mut self, q3: impl Into<String>) -> Self {
        self.q3 = Some(q3.into());
        self
    }

    /// Builds and inserts the qualifying row into the database.
    pub async fn build(self) -> Result<entity::qualifying::Model, DbErr> {
        entity::qualifying::ActiveModel {
            race_id: ActiveValue::Set(self.race_id),
            driver_id: ActiveValue::Set(self.driver_id),
            constructor_id: ActiveValue::Set(self.constructor_id),
            position: ActiveValue::Set(self.position),
            q1: ActiveValue::Set(self.q1),
            q2: ActiveValue::Set(self.q2),
            q3: ActiveValue::Set(self.q3),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a qualifying row with only a Q3 time.
pub async fn create_qualifying(
    db: &DatabaseConnection,
    race_id: i32,
    driver_id: i32,
    constructor_id: i32,
    q3: &str,
) -> Result<entity::qualifying::Model, DbErr> {
    QualifyingFactory::new(db, race_id, driver_id, constructor_id)
        .q3(q3)
        .build()
        .await
}
