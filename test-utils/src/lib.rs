//! Racedash Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the racedash
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for individual rows and fixtures for complete race weekends.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories with sensible defaults
//! - **fixture**: Seeded scenarios spanning several tables
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_race_lookup() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_race_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
