// src/handlers/home.rs

use axum::{extract::State, response::Html};
use sqlx::SqlitePool;

use crate::{
    error::PageError,
    models::{artist::Artist, venue::Venue},
    utils::listing::{RECENT_ACTIVITY_LIMIT, recent_activity},
    views,
};

/// Renders the home page with the newest artists and venues.
/// Handlers that finish a write land here with a `flash` message.
pub(crate) async fn render_home(
    pool: &SqlitePool,
    flash: Option<&str>,
) -> Result<Html<String>, PageError> {
    let artists = sqlx::query_as::<_, Artist>(
        "SELECT * FROM artists ORDER BY joined DESC, id DESC LIMIT ?",
    )
    .bind(RECENT_ACTIVITY_LIMIT as i64)
    .fetch_all(pool)
    .await?;

    let venues = sqlx::query_as::<_, Venue>(
        "SELECT * FROM venues ORDER BY joined DESC, id DESC LIMIT ?",
    )
    .bind(RECENT_ACTIVITY_LIMIT as i64)
    .fetch_all(pool)
    .await?;

    let recent = recent_activity(&artists, &venues, RECENT_ACTIVITY_LIMIT);
    Ok(Html(views::home::home(&recent, flash).into_string()))
}

pub async fn index(State(pool): State<SqlitePool>) -> Result<Html<String>, PageError> {
    render_home(&pool, None).await
}
