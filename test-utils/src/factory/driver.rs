//! Driver factory for creating test drivers.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drivers with customizable fields.
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    forename: String,
    surname: String,
    code: Option<String>,
    nationality: Option<String>,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory with default values.
    ///
    /// Defaults:
    /// - forename: `"Driver"`
    /// - surname: `"Number{id}"`
    /// - code, nationality: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            forename: "Driver".to_string(),
            surname: format!("Number{}", id),
            code: None,
            nationality: None,
        }
    }

    pub fn forename(mut self, forename: impl Into<String>) -> Self {
        self.forename = forename.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    /// Builds and inserts the driver into the database.
    ///
    /// # Returns
    /// - `Ok(entity::driver::Model)` - Created driver
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        entity::driver::ActiveModel {
            forename: ActiveValue::Set(self.forename),
            surname: ActiveValue::Set(self.surname),
            code: ActiveValue::Set(self.code),
            nationality: ActiveValue::Set(self.nationality),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a driver with default values.
pub async fn create_driver(db: &DatabaseConnection) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db).build().await
}

/// Creates a driver with the given names.
///
/// Shorthand for `DriverFactory::new(db).forename(..).surname(..).build().await`.
pub async fn create_named_driver(
    db: &DatabaseConnection,
    forename: &str,
    surname: &str,
) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db)
        .forename(forename)
        .surname(surname)
        .build()
        .await
}
