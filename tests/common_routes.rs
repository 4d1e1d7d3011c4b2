mod common;

use axum::http::StatusCode;
use bookshelf::apply_migrations;
use common::spawn_app;

#[tokio::test]
async fn health_ready_and_version() {
    let app = spawn_app().await;

    let (status, body) = app.send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.send("GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (_, body) = app.send("GET", "/version", None).await;
    assert_eq!(body["name"], "bookshelf");
}

#[tokio::test]
async fn ready_reports_closed_pool() {
    let app = spawn_app().await;
    app.pool.close().await;
    let (status, body) = app.send("GET", "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let app = spawn_app().await;
    let applied_again = apply_migrations(&app.pool).await.unwrap();
    assert!(applied_again.is_empty());

    let (recorded,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM _schema_migrations")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(recorded as usize, bookshelf::migration::MIGRATIONS.len());
}
