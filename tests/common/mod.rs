// tests/common/mod.rs

#![allow(dead_code)]

use fyyur_trivia::{config::Config, routes, state::AppState};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Single-connection in-memory database with migrations applied.
/// One connection, never recycled, so every query sees the same database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    pool
}

pub fn test_state(pool: SqlitePool) -> AppState {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        rust_log: "error".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        log_dir: "logs".to_string(),
    };
    AppState { pool, config }
}

/// Spawns the app on a random port.
/// Returns the base URL (e.g. "http://127.0.0.1:12345") and the pool for seeding.
pub async fn spawn_app() -> (String, SqlitePool) {
    let pool = test_pool().await;
    let app = routes::create_router(test_state(pool.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, pool)
}

/// Inserts a question directly and returns its id.
pub async fn seed_question(pool: &SqlitePool, text: &str, category: i64, difficulty: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(text)
    .bind("answer")
    .bind(category)
    .bind(difficulty)
    .fetch_one(pool)
    .await
    .expect("Failed to seed question")
}
