use super::*;

/// Tests loading Q3 times of the fixture race.
///
/// Expected: three rows with driver, team and parsed Q3 time
#[tokio::test]
async fn gets_qualifying_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let weekend = race_weekend::seed(db).await?;

    let rows = QualifyingRepository::new(db)
        .get_by_race(weekend.race.id)
        .await?;

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].driver_id, weekend.button.id);
    assert_eq!(rows[0].team.as_deref(), Some("Brawn"));
    assert_eq!(rows[0].q3.as_deref(), Some("1:26.202"));
    assert_eq!(rows[0].q3_milliseconds(), Some(86_202));

    Ok(())
}

/// Tests that a missing Q3 marker is normalized away.
///
/// Expected: q3 is None for a "\N" value
#[tokio::test]
async fn normalizes_missing_q3() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, race) = factory::helpers::create_race_with_circuit(db).await?;
    let (driver, constructor) = factory::helpers::create_driver_with_constructor(db).await?;
    factory::create_qualifying(db, race.id, driver.id, constructor.id, "\\N").await?;

    let rows = QualifyingRepository::new(db).get_by_race(race.id).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].q3, None);
    assert_eq!(rows[0].q3_milliseconds(), None);

    Ok(())
}
