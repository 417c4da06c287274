mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_signup_success(pool: PgPool) {
    let camper = common::create_test_camper(&pool, "Alex", 12).await;
    let activity = common::create_test_activity(&pool, "Archery", 2).await;
    let server = common::make_server(pool);

    let response = server
        .post("/signups")
        .json(&json!({"camper_id": camper, "activity_id": activity, "time": 9}))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["camper_id"], camper);
    assert_eq!(body["activity_id"], activity);
    assert_eq!(body["time"], 9);
    assert_eq!(
        body["activity"],
        json!({"id": activity, "name": "Archery", "difficulty": 2})
    );
    assert_eq!(
        body["camper"],
        json!({"id": camper, "name": "Alex", "age": 12})
    );
}

#[sqlx::test]
async fn test_create_signup_time_out_of_range(pool: PgPool) {
    let camper = common::create_test_camper(&pool, "Alex", 12).await;
    let activity = common::create_test_activity(&pool, "Archery", 2).await;
    let server = common::make_server(pool.clone());

    for time in [-1, 24, 25] {
        let response = server
            .post("/signups")
            .json(&json!({"camper_id": camper, "activity_id": activity, "time": time}))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"errors": ["validation errors"]}));
    }

    assert_eq!(common::count_rows(&pool, "signups").await, 0);
}

#[sqlx::test]
async fn test_create_signup_unknown_camper(pool: PgPool) {
    let activity = common::create_test_activity(&pool, "Archery", 2).await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/signups")
        .json(&json!({"camper_id": 999, "activity_id": activity, "time": 9}))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({"errors": ["validation errors"]}));
    assert_eq!(common::count_rows(&pool, "signups").await, 0);
}

#[sqlx::test]
async fn test_create_signup_unknown_activity(pool: PgPool) {
    let camper = common::create_test_camper(&pool, "Alex", 12).await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/signups")
        .json(&json!({"camper_id": camper, "activity_id": 999, "time": 9}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::count_rows(&pool, "signups").await, 0);
}

#[sqlx::test]
async fn test_create_signup_missing_field(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/signups")
        .json(&json!({"camper_id": 1, "time": 9}))
        .await;

    response.assert_status_bad_request();
}
