//! Circuit factory for creating test circuits.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test circuits with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let circuit = CircuitFactory::new(&db)
///     .name("Silverstone Circuit")
///     .location("Silverstone")
///     .build()
///     .await?;
/// ```
pub struct CircuitFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: Option<String>,
    country: Option<String>,
}

impl<'a> CircuitFactory<'a> {
    /// Creates a new CircuitFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Circuit {id}"`
    /// - location: `"Location {id}"`
    /// - country: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Circuit {}", id),
            location: Some(format!("Location {}", id)),
            country: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Builds and inserts the circuit into the database.
    ///
    /// # Returns
    /// - `Ok(entity::circuit::Model)` - Created circuit
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::circuit::Model, DbErr> {
        entity::circuit::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            country: ActiveValue::Set(self.country),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a circuit with default values.
pub async fn create_circuit(db: &DatabaseConnection) -> Result<entity::circuit::Model, DbErr> {
    CircuitFactory::new(db).build().await
}
