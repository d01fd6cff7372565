use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};
use test_utils::{builder::TestBuilder, fixture::race_weekend};

mod summary;

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

/// Sends a GET request and returns the status with the parsed JSON body.
async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
