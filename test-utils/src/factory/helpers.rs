//! Shared helper utilities for factory methods.
//!
//! Provides ID generation for unique default values and convenience methods for
//! creating rows together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique default values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a circuit and a race held at it, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((circuit, race))` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_race_with_circuit(
    db: &DatabaseConnection,
) -> Result<(entity::circuit::Model, entity::race::Model), DbErr> {
    let circuit = crate::factory::circuit::create_circuit(db).await?;
    let race = crate::factory::race::create_race(db, circuit.id).await?;

    Ok((circuit, race))
}

/// Creates a driver and a constructor, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((driver, constructor))` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_driver_with_constructor(
    db: &DatabaseConnection,
) -> Result<(entity::driver::Model, entity::constructor::Model), DbErr> {
    let driver = crate::factory::driver::create_driver(db).await?;
    let constructor = crate::factory::constructor::create_constructor(db).await?;

    Ok((driver, constructor))
}
