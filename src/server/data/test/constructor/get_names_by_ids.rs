use super::*;

/// Tests batched name lookup with duplicate and unknown IDs.
///
/// Expected: one entry per known constructor, unknown IDs absent
#[tokio::test]
async fn maps_known_ids_to_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brawn = factory::constructor::create_named_constructor(db, "Brawn").await?;
    let red_bull = factory::constructor::create_named_constructor(db, "Red Bull").await?;

    let repo = ConstructorRepository::new(db);
    let names = repo
        .get_names_by_ids([brawn.id, red_bull.id, brawn.id, 999_999])
        .await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&brawn.id).map(String::as_str), Some("Brawn"));
    assert_eq!(names.get(&red_bull.id).map(String::as_str), Some("Red Bull"));
    assert!(!names.contains_key(&999_999));

    Ok(())
}

/// Tests lookup with no IDs.
///
/// Expected: Ok(empty map)
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let names = ConstructorRepository::new(db)
        .get_names_by_ids(Vec::new())
        .await?;

    assert!(names.is_empty());

    Ok(())
}
