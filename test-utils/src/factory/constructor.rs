//! Constructor factory for creating test teams.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test constructors with customizable fields.
pub struct ConstructorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    nationality: Option<String>,
}

impl<'a> ConstructorFactory<'a> {
    /// Creates a new ConstructorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - nationality: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            nationality: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    /// Builds and inserts the constructor into the database.
    pub async fn build(self) -> Result<entity::constructor::Model, DbErr> {
        entity::constructor::ActiveModel {
            name: ActiveValue::Set(self.name),
            nationality: ActiveValue::Set(self.nationality),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a constructor with default values.
pub async fn create_constructor(
    db: &DatabaseConnection,
) -> Result<entity::constructor::Model, DbErr> {
    ConstructorFactory::new(db).build().await
}

/// Creates a constructor with the given name.
pub async fn create_named_constructor(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::constructor::Model, DbErr> {
    ConstructorFactory::new(db).name(name).build().await
}
