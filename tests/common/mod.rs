#![allow(dead_code)]

use axum_test::TestServer;
use camp_signups::routes::router;
use camp_signups::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_camper(pool: &PgPool, name: &str, age: i32) -> i64 {
    sqlx::query_scalar("INSERT INTO campers (name, age) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(age)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_activity(pool: &PgPool, name: &str, difficulty: i32) -> i64 {
    sqlx::query_scalar("INSERT INTO activities (name, difficulty) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(difficulty)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_signup(pool: &PgPool, camper_id: i64, activity_id: i64, time: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO signups (camper_id, activity_id, time) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(camper_id)
    .bind(activity_id)
    .bind(time)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::from_pool(Arc::new(pool))
}

pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}
