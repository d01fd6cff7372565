use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// In-memory race database owned by a single test.
///
/// Each context opens its own `sqlite::memory:` database, so tests never see each
/// other's rows. The connection is opened on first use.
pub struct TestContext {
    /// The connection, once opened. Tests usually read it as
    /// `test.db.as_ref().unwrap()` after `TestBuilder::build()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening the in-memory database if needed.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Open connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect("sqlite::memory:").await?,
        };

        let db = self.db.insert(db);

        Ok(&*db)
    }

    /// Runs the given `CREATE TABLE` statements in order.
    ///
    /// # Returns
    /// - `Ok(())` - Every table exists
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
