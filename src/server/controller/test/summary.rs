use super::*;

#[tokio::test]
async fn circuit_summary_returns_payload() {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let weekend = race_weekend::seed(db).await.unwrap();

    let uri = format!("/races/race_circuit_summary/{}", weekend.race.id);
    let (status, body) = get(app(db), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["circuit_name"], "Albert Park Grand Prix Circuit");
    assert_eq!(body["location"], "Melbourne");
    assert_eq!(body["race_name"], "Australian Grand Prix");
    assert_eq!(body["year"], 2009);
    assert_eq!(body["fastest_lap"]["time"], "1:29.400");
    assert_eq!(body["top_fastest_laps"][0]["position"], 1);
    assert_eq!(body["top_fastest_laps"][0]["driver"], "Barrichello");
    assert_eq!(body["pace_evolution"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn driver_summary_returns_payload() {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let weekend = race_weekend::seed(db).await.unwrap();

    let uri = format!("/races/race_driver_summary/{}", weekend.race.id);
    let (status, body) = get(app(db), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["race_winner"]["driver"], "Jenson Button");
    assert_eq!(body["pole_position"]["time"], "1:26.202");
    assert_eq!(body["fastest_lap"]["driver"], "Rubens Barrichello");
    assert_eq!(body["results"][0]["gap"], "");
    assert_eq!(body["results"][1]["gap"], "+0.807s");
    assert_eq!(body["results"][2]["position"], Value::Null);
}

#[tokio::test]
async fn constructor_summary_returns_payload() {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let weekend = race_weekend::seed(db).await.unwrap();

    let uri = format!("/races/race_constructor_summary/{}", weekend.race.id);
    let (status, body) = get(app(db), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["best_finisher"]["team"], "Brawn");
    assert_eq!(body["most_points"]["points"], 18.0);
    assert_eq!(body["results"][1]["avg_position"], Value::Null);
}

#[tokio::test]
async fn every_summary_is_404_for_unknown_race() {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    race_weekend::seed(db).await.unwrap();

    for tab in ["circuit", "driver", "constructor"] {
        let uri = format!("/races/race_{}_summary/999999", tab);
        let (status, body) = get(app(db), &uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body, serde_json::json!({ "detail": "Race not found." }));
    }
}

#[tokio::test]
async fn summary_with_non_integer_id_is_400() {
    let test = TestBuilder::new()
        .with_race_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = get(app(db), "/races/race_driver_summary/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
