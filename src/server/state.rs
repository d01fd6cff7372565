//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared state handed to every handler through Axum's state extraction.
///
/// The race database is only read, so the connection pool is the only dependency.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the race database.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
