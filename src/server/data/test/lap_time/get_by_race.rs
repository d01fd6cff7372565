use super::*;

/// Tests loading every lap of a race with driver names.
///
/// Verifies that laps come back in key order (driver, then lap) and that laps of
/// the other race in the fixture are excluded.
///
/// Expected: Ok(Vec<DriverLap>) with 8 laps
#[tokio::test]
async fn gets_laps_of_race_in_key_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let weekend = race_weekend::seed(db).await?;

    let repo = LapTimeRepository::new(db);
    let laps = repo.get_by_race(weekend.race.id).await?;

    assert_eq!(laps.len(), 8);
    assert_eq!(laps[0].driver_id, weekend.button.id);
    assert_eq!(laps[0].lap, 1);
    assert_eq!(laps[2].lap, 3);
    assert_eq!(laps[3].driver_id, weekend.barrichello.id);
    assert_eq!(laps[7].driver_id, weekend.vettel.id);
    assert_eq!(laps[7].lap, 2);

    let driver = laps[0].driver.as_ref().unwrap();
    assert_eq!(driver.full_name(), "Jenson Button");

    assert!(laps.iter().all(|lap| lap.milliseconds != 85_000));

    Ok(())
}

/// Tests that raw running positions are parsed at the repository boundary.
///
/// Expected: "\N" and NULL positions become Unclassified
#[tokio::test]
async fn parses_running_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, race) = factory::helpers::create_race_with_circuit(db).await?;
    let driver = factory::create_driver(db).await?;

    factory::lap_time::LapTimeFactory::new(db, race.id, driver.id, 1)
        .position("4")
        .build()
        .await?;
    factory::lap_time::LapTimeFactory::new(db, race.id, driver.id, 2)
        .position("\\N")
        .build()
        .await?;
    factory::lap_time::LapTimeFactory::new(db, race.id, driver.id, 3)
        .no_position()
        .build()
        .await?;

    let laps = LapTimeRepository::new(db).get_by_race(race.id).await?;

    assert_eq!(laps[0].position, Position::Classified(4));
    assert_eq!(laps[1].position, Position::Unclassified);
    assert_eq!(laps[2].position, Position::Unclassified);

    Ok(())
}

/// Tests a race without recorded laps.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_race_without_laps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, race) = factory::helpers::create_race_with_circuit(db).await?;

    let laps = LapTimeRepository::new(db).get_by_race(race.id).await?;

    assert!(laps.is_empty());

    Ok(())
}
