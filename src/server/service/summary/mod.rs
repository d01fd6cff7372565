//! Race summary aggregation for the circuit, drivers and constructors tabs.
//!
//! Every summary runs inside a single read transaction: the race is validated first,
//! then a fixed sequence of repository queries loads the rows, and the payload is
//! assembled in memory by the pure builders in the submodules.

pub mod circuit;
pub mod constructor;
pub mod driver;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        circuit_summary::RaceCircuitSummaryDto, constructor_summary::RaceConstructorSummaryDto,
        driver_summary::RaceDriverSummaryDto,
    },
    server::{
        data::{
            lap_time::LapTimeRepository, qualifying::QualifyingRepository,
            race::RaceRepository, result::ResultRepository,
        },
        error::AppError,
        model::race::RaceWithCircuit,
        service::race::RACE_NOT_FOUND,
    },
};

/// Number of laps listed in the circuit tab's fastest laps table.
pub const TOP_FASTEST_LAPS: u64 = 20;

pub struct RaceSummaryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaceSummaryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the circuit tab payload for a race
    ///
    /// # Returns
    /// - `Ok(RaceCircuitSummaryDto)`: Race metadata and lap datasets; lap collections are
    ///   empty when no laps were recorded
    /// - `Err(AppError::NotFound)`: The race does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn circuit_summary(&self, race_id: i32) -> Result<RaceCircuitSummaryDto, AppError> {
        let txn = self.db.begin().await?;

        let race = Self::require_race(&txn, race_id).await?;

        let lap_repo = LapTimeRepository::new(&txn);
        let laps = lap_repo.get_by_race(race_id).await?;
        let top = lap_repo
            .get_fastest_by_race(race_id, TOP_FASTEST_LAPS)
            .await?;
        let results = ResultRepository::new(&txn).get_by_race(race_id).await?;

        txn.commit().await?;

        tracing::debug!(
            race_id,
            laps = laps.len(),
            results = results.len(),
            "Building circuit summary"
        );

        Ok(circuit::build(race, laps, top, &results))
    }

    /// Builds the drivers tab payload for a race
    ///
    /// # Returns
    /// - `Ok(RaceDriverSummaryDto)`: Winner, pole, fastest lap and the results table;
    ///   missing data degrades to `null` fields
    /// - `Err(AppError::NotFound)`: The race does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn driver_summary(&self, race_id: i32) -> Result<RaceDriverSummaryDto, AppError> {
        let txn = self.db.begin().await?;

        Self::require_race(&txn, race_id).await?;

        let results = ResultRepository::new(&txn).get_by_race(race_id).await?;
        let qualifying = QualifyingRepository::new(&txn).get_by_race(race_id).await?;
        let fastest = LapTimeRepository::new(&txn)
            .get_fastest_by_race(race_id, 1)
            .await?
            .into_iter()
            .next();

        txn.commit().await?;

        tracing::debug!(
            race_id,
            results = results.len(),
            qualifying = qualifying.len(),
            "Building driver summary"
        );

        Ok(driver::build(results, qualifying, fastest))
    }

    /// Builds the constructors tab payload for a race
    ///
    /// # Returns
    /// - `Ok(RaceConstructorSummaryDto)`: Per-constructor rollups and lap positions
    /// - `Err(AppError::NotFound)`: The race does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn constructor_summary(
        &self,
        race_id: i32,
    ) -> Result<RaceConstructorSummaryDto, AppError> {
        let txn = self.db.begin().await?;

        Self::require_race(&txn, race_id).await?;

        let results = ResultRepository::new(&txn).get_by_race(race_id).await?;
        let laps = LapTimeRepository::new(&txn).get_by_race(race_id).await?;

        txn.commit().await?;

        tracing::debug!(
            race_id,
            results = results.len(),
            laps = laps.len(),
            "Building constructor summary"
        );

        Ok(constructor::build(results, laps))
    }

    /// Loads the race and its circuit, failing with 404 when either is missing.
    ///
    /// Every summary calls this first so unknown race IDs are rejected the same way
    /// on all three tabs.
    pub async fn require_race<C: ConnectionTrait>(
        db: &C,
        race_id: i32,
    ) -> Result<RaceWithCircuit, AppError> {
        RaceRepository::new(db)
            .get_with_circuit(race_id)
            .await?
            .ok_or_else(|| AppError::NotFound(RACE_NOT_FOUND.to_string()))
    }
}
