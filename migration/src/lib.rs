pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_circuit_table;
mod m20261001_000002_create_race_table;
mod m20261001_000003_create_driver_table;
mod m20261001_000004_create_constructor_table;
mod m20261001_000005_create_lap_time_table;
mod m20261001_000006_create_result_table;
mod m20261001_000007_create_qualifying_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_circuit_table::Migration),
            Box::new(m20261001_000002_create_race_table::Migration),
            Box::new(m20261001_000003_create_driver_table::Migration),
            Box::new(m20261001_000004_create_constructor_table::Migration),
            Box::new(m20261001_000005_create_lap_time_table::Migration),
            Box::new(m20261001_000006_create_result_table::Migration),
            Box::new(m20261001_000007_create_qualifying_table::Migration),
        ]
    }
}
