use super::*;

/// Tests listing races in ID order.
///
/// Expected: Ok(Vec<Race>) with both races, lowest ID first
#[tokio::test]
async fn lists_races_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_meta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (circuit, first) = factory::helpers::create_race_with_circuit(db).await?;
    let second = factory::create_race(db, circuit.id).await?;

    let repo = RaceRepository::new(db);
    let races = repo.get_all().await?;

    assert_eq!(races.len(), 2);
    assert_eq!(races[0].id, first.id);
    assert_eq!(races[1].id, second.id);

    Ok(())
}

/// Tests listing races on an empty database.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_without_races() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_meta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let races = RaceRepository::new(db).get_all().await?;

    assert!(races.is_empty());

    Ok(())
}
