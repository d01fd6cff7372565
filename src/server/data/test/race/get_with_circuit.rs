use super::*;

/// Tests joining a race with its circuit.
///
/// Expected: Ok(Some(RaceWithCircuit)) carrying circuit name and location
#[tokio::test]
async fn joins_circuit_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_meta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let circuit = factory::circuit::CircuitFactory::new(db)
        .name("Circuit de Monaco")
        .location("Monte-Carlo")
        .build()
        .await?;
    let race = factory::race::RaceFactory::new(db, circuit.id)
        .name("Monaco Grand Prix")
        .year(2010)
        .build()
        .await?;

    let repo = RaceRepository::new(db);
    let result = repo.get_with_circuit(race.id).await?.unwrap();

    assert_eq!(result.circuit_name, "Circuit de Monaco");
    assert_eq!(result.location.as_deref(), Some("Monte-Carlo"));
    assert_eq!(result.race.name, "Monaco Grand Prix");
    assert_eq!(result.race.year, 2010);

    Ok(())
}

/// Tests joining a race that does not exist.
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

    let result = RaceRepository::new(db).get_with_circuit(999_999).await?;

    assert!(result.is_none());

    Ok(())
}
