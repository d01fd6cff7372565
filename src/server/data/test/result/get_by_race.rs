use super::*;

/// Tests loading the classification of the fixture race.
///
/// Expected: three results with names, teams and parsed values
#[tokio::test]
async fn gets_results_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let weekend = race_weekend::seed(db).await?;

    let repo = ResultRepository::new(db);
    let results = repo.get_by_race(weekend.race.id).await?;

    assert_eq!(results.len(), 3);

    let winner = &results[0];
    assert_eq!(winner.driver.as_ref().unwrap().full_name(), "Jenson Button");
    assert_eq!(winner.team.as_deref(), Some("Brawn"));
    assert_eq!(winner.position, Position::Classified(1));
    assert_eq!(winner.time.as_deref(), Some("1:34:15.784"));
    assert_eq!(winner.milliseconds, Some(5_655_784));
    assert_eq!(winner.points, Some(10.0));
    assert_eq!(winner.laps, Some(58));

    let retired = &results[2];
    assert_eq!(retired.team.as_deref(), Some("Red Bull"));
    assert_eq!(retired.position, Position::Unclassified);
    assert_eq!(retired.time, None);
    assert_eq!(retired.milliseconds, None);
    assert_eq!(retired.points, None);

    Ok(())
}

/// Tests that results of other races are excluded.
///
/// Expected: only the single result of the second race
#[tokio::test]
async fn excludes_other_races() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let weekend = race_weekend::seed(db).await?;

    let results = ResultRepository::new(db)
        .get_by_race(weekend.other_race.id)
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].driver_id, weekend.vettel.id);
    assert_eq!(results[0].milliseconds, Some(5_500_000));

    Ok(())
}

