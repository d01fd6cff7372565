//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test rows with sensible defaults,
//! reducing boilerplate in tests. Each table has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let (circuit, race) = factory::helpers::create_race_with_circuit(&db).await?;
//!     let driver = factory::driver::DriverFactory::new(&db)
//!         .forename("Lewis")
//!         .surname("Hamilton")
//!         .build()
//!         .await?;
//!     factory::lap_time::create_lap_time(&db, race.id, driver.id, 1, 91_234).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `circuit` - Create circuits
//! - `race` - Create races
//! - `driver` - Create drivers
//! - `constructor` - Create constructors
//! - `lap_time` - Create lap times
//! - `result` - Create race results
//! - `qualifying` - Create qualifying rows
//! - `helpers` - ID generation and multi-table convenience methods

pub mod circuit;
pub mod constructor;
pub mod driver;
pub mod helpers;
pub mod lap_time;
pub mod qualifying;
pub mod race;
pub mod result;

pub use circuit::create_circuit;
pub use constructor::create_constructor;
pub use driver::create_driver;
pub use lap_time::create_lap_time;
pub use qualifying::create_qualifying;
pub use race::create_race;
pub use result::create_result;
