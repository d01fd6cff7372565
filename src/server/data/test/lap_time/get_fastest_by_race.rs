use super::*;

/// Tests fastest lap ordering on the fixture race.
///
/// Expected: laps ordered by lap time, limited to the requested count
#[tokio::test]
async fn orders_by_lap_time_and_limits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let weekend = race_weekend::seed(db).await?;

    let repo = LapTimeRepository::new(db);
    let laps = repo.get_fastest_by_race(weekend.race.id, 3).await?;

    let times: Vec<i64> = laps.iter().map(|lap| lap.milliseconds).collect();
    assert_eq!(times, vec![89_400, 89_500, 89_900]);
    assert_eq!(laps[0].driver_id, weekend.barrichello.id);
    assert_eq!(laps[0].lap, 2);

    let all = repo.get_fastest_by_race(weekend.race.id, 20).await?;
    assert_eq!(all.len(), 8);
    assert_eq!(all[7].milliseconds, 93_100);

    Ok(())
}

/// Tests that equal lap times keep key order.
///
/// Expected: ties broken by driver ID, then lap number
#[tokio::test]
async fn breaks_ties_by_driver_then_lap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, race) = factory::helpers::create_race_with_circuit(db).await?;
    let first = factory::create_driver(db).await?;
    let second = factory::create_driver(db).await?;

    factory::create_lap_time(db, race.id, second.id, 1, 80_000).await?;
    factory::create_lap_time(db, race.id, first.id, 5, 80_000).await?;
    factory::create_lap_time(db, race.id, first.id, 2, 80_000).await?;

    let laps = LapTimeRepository::new(db)
        .get_fastest_by_race(race.id, 20)
        .await?;

    let order: Vec<(i32, i32)> = laps.iter().map(|lap| (lap.driver_id, lap.lap)).collect();
    assert_eq!(
        order,
        vec![(first.id, 2), (first.id, 5), (second.id, 1)]
    );

    Ok(())
}
