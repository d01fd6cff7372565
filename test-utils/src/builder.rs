use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builds a [`TestContext`] with the race tables a test needs.
///
/// Tables are created from the entity definitions in the order they are added, so
/// referenced tables must come first.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture::race_weekend};
///
/// let test = TestBuilder::new().with_race_tables().build().await?;
/// let db = test.db.as_ref().unwrap();
/// let weekend = race_weekend::seed(db).await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table of one entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds `circuits` and `races`, enough for race lookups.
    pub fn with_race_meta_tables(self) -> Self {
        self.with_table(Circuit).with_table(Race)
    }

    /// Adds every table of the race database.
    ///
    /// Order: circuits, races, drivers, constructors, lap_times, results, qualifying.
    pub fn with_race_tables(self) -> Self {
        self.with_race_meta_tables()
            .with_table(Driver)
            .with_table(Constructor)
            .with_table(LapTime)
            .with_table(RaceResult)
            .with_table(Qualifying)
    }

    /// Opens the in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an open connection
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
