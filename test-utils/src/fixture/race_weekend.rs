//! A small, fully known race weekend.
//!
//! Seeds the "Australian Grand Prix" (2009) at "Albert Park Grand Prix Circuit",
//! Melbourne, with two constructors and three drivers:
//!
//! | driver             | team     | pos  | race ms   | points | laps | q3       |
//! |--------------------|----------|------|-----------|--------|------|----------|
//! | Jenson Button      | Brawn    | 1    | 5655784   | 10     | 58   | 1:26.202 |
//! | Rubens Barrichello | Brawn    | 2    | 5656591   | 8      | 58   | 1:26.505 |
//! | Sebastian Vettel   | Red Bull | `\N` | `\N`      | NULL   | 56   | 1:26.830 |
//!
//! Lap times in milliseconds (running position in brackets):
//!
//! | lap | Button      | Barrichello | Vettel      |
//! |-----|-------------|-------------|-------------|
//! | 1   | 92000 (1)   | 92800 (2)   | 93100 (3)   |
//! | 2   | 89500 (1)   | 89400 (3)   | 89900 (2)   |
//! | 3   | 90100 (1)   | 90300 (2)   | -           |
//!
//! A second race ("Malaysian Grand Prix") at the same circuit holds one faster lap for
//! Button and a win for Vettel so tests can check rows never leak between races.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    circuit::CircuitFactory, constructor::create_named_constructor,
    driver::create_named_driver, lap_time::LapTimeFactory, qualifying::QualifyingFactory,
    race::RaceFactory, result::ResultFactory,
};

/// Rows created by [`seed`].
pub struct RaceWeekend {
    pub circuit: entity::circuit::Model,
    pub race: entity::race::Model,
    pub other_race: entity::race::Model,
    pub button: entity::driver::Model,
    pub barrichello: entity::driver::Model,
    pub vettel: entity::driver::Model,
    pub brawn: entity::constructor::Model,
    pub red_bull: entity::constructor::Model,
}

/// Seeds the race weekend described in the module documentation.
///
/// Requires every table from `TestBuilder::with_race_tables()`.
///
/// # Returns
/// - `Ok(RaceWeekend)` - The created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn seed(db: &DatabaseConnection) -> Result<RaceWeekend, DbErr> {
    let circuit = CircuitFactory::new(db)
        .name("Albert Park Grand Prix Circuit")
        .location("Melbourne")
        .country("Australia")
        .build()
        .await?;
    let race = RaceFactory::new(db, circuit.id)
        .name("Australian Grand Prix")
        .year(2009)
        .round(1)
        .build()
        .await?;
    let other_race = RaceFactory::new(db, circuit.id)
        .name("Malaysian Grand Prix")
        .year(2009)
        .round(2)
        .build()
        .await?;

    let button = create_named_driver(db, "Jenson", "Button").await?;
    let barrichello = create_named_driver(db, "Rubens", "Barrichello").await?;
    let vettel = create_named_driver(db, "Sebastian", "Vettel").await?;

    let brawn = create_named_constructor(db, "Brawn").await?;
    let red_bull = create_named_constructor(db, "Red Bull").await?;

    ResultFactory::new(db, race.id, button.id, brawn.id)
        .grid(1)
        .position("1")
        .time("1:34:15.784")
        .milliseconds(5_655_784)
        .points(10.0)
        .laps(58)
        .build()
        .await?;
    ResultFactory::new(db, race.id, barrichello.id, brawn.id)
        .grid(2)
        .position("2")
        .time("+0.807")
        .milliseconds(5_656_591)
        .points(8.0)
        .laps(58)
        .build()
        .await?;
    ResultFactory::new(db, race.id, vettel.id, red_bull.id)
        .grid(3)
        .position("\\N")
        .time("\\N")
        .raw_milliseconds("\\N")
        .laps(56)
        .build()
        .await?;

    let laps: [(i32, i32, i64, &str); 8] = [
        (button.id, 1, 92_000, "1"),
        (button.id, 2, 89_500, "1"),
        (button.id, 3, 90_100, "1"),
        (barrichello.id, 1, 92_800, "2"),
        (barrichello.id, 2, 89_400, "3"),
        (barrichello.id, 3, 90_300, "2"),
        (vettel.id, 1, 93_100, "3"),
        (vettel.id, 2, 89_900, "2"),
    ];
    for (driver_id, lap, milliseconds, position) in laps {
        LapTimeFactory::new(db, race.id, driver_id, lap)
            .milliseconds(milliseconds)
            .position(position)
            .build()
            .await?;
    }

    for (driver_id, constructor_id, q3) in [
        (button.id, brawn.id, "1:26.202"),
        (barrichello.id, brawn.id, "1:26.505"),
        (vettel.id, red_bull.id, "1:26.830"),
    ] {
        QualifyingFactory::new(db, race.id, driver_id, constructor_id)
            .q3(q3)
            .build()
            .await?;
    }

    ResultFactory::new(db, other_race.id, vettel.id, red_bull.id)
        .position("1")
        .milliseconds(5_500_000)
        .points(10.0)
        .laps(56)
        .build()
        .await?;
    LapTimeFactory::new(db, other_race.id, button.id, 1)
        .milliseconds(85_000)
        .position("1")
        .build()
        .await?;

    Ok(RaceWeekend {
        circuit,
        race,
        other_race,
        button,
        barrichello,
        vettel,
        brawn,
        red_bull,
    })
}
