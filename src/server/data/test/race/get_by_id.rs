use super::*;

/// Tests getting an existing race by ID.
///
/// Expected: Ok(Some(Race)) with the stored fields
#[tokio::test]
async fn gets_existing_race() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_meta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let circuit = factory::create_circuit(db).await?;
    let race = factory::race::RaceFactory::new(db, circuit.id)
        .name("Monaco Grand Prix")
        .year(2010)
        .round(6)
        .build()
        .await?;

    let repo = RaceRepository::new(db);
    let result = repo.get_by_id(race.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, race.id);
    assert_eq!(found.name, "Monaco Grand Prix");
    assert_eq!(found.year, 2010);
    assert_eq!(found.round, 6);
    assert_eq!(found.circuit_id, circuit.id);

    Ok(())
}

/// Tests getting a race that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_race() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_meta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RaceRepository::new(db);
    let result = repo.get_by_id(999_999).await?;

    assert!(result.is_none());

    Ok(())
}
