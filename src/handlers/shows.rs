// src/handlers/shows.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::{AppError, PageError},
    extractors::HtmlForm,
    handlers::home::render_home,
    models::{
        artist::Artist,
        form::error_messages,
        show::{NewShow, ShowForm, ShowListing},
        venue::Venue,
    },
    views::{self, components::FieldErrors},
};

/// Lists shows starting today or later.
pub async fn list_shows(State(pool): State<SqlitePool>) -> Result<Html<String>, PageError> {
    let today = chrono::Local::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InternalServerError("invalid midnight".to_string()))?;

    let shows = sqlx::query_as::<_, ShowListing>(
        r#"
        SELECT
            s.id, s.start_time,
            a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
            v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        JOIN venues v ON v.id = s.venue_id
        WHERE s.start_time >= ?
        ORDER BY s.start_time
        "#,
    )
    .bind(today)
    .fetch_all(&pool)
    .await?;

    Ok(Html(views::shows::list(&shows, None).into_string()))
}

async fn render_form(
    pool: &SqlitePool,
    status: StatusCode,
    form: &ShowForm,
    errors: &FieldErrors,
    flash: Option<&str>,
) -> Result<Response, PageError> {
    let artists = sqlx::query_as::<_, Artist>("SELECT * FROM artists ORDER BY name")
        .fetch_all(pool)
        .await?;
    let venues = sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY name")
        .fetch_all(pool)
        .await?;

    let markup = views::shows::form(form, &artists, &venues, errors, flash);
    Ok((status, Html(markup.into_string())).into_response())
}

pub async fn create_show_form(State(pool): State<SqlitePool>) -> Result<Response, PageError> {
    let form = ShowForm {
        start_time: chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        ..Default::default()
    };
    render_form(&pool, StatusCode::OK, &form, &FieldErrors::new(), None).await
}

/// Validates and lists a show. Unknown artist or venue ids re-render the
/// form with a message naming the missing side.
pub async fn create_show(
    State(pool): State<SqlitePool>,
    HtmlForm(fields): HtmlForm,
) -> Result<Response, PageError> {
    let form = ShowForm::from(&fields);
    if let Err(validation_errors) = form.validate() {
        let errors = error_messages(&validation_errors);
        return render_form(&pool, StatusCode::UNPROCESSABLE_ENTITY, &form, &errors, None).await;
    }

    let show = match NewShow::try_from(form.clone()) {
        Ok(show) => show,
        Err(e) => {
            let mut errors = FieldErrors::new();
            errors.insert("__all__".to_string(), vec![e.to_string()]);
            return render_form(&pool, StatusCode::UNPROCESSABLE_ENTITY, &form, &errors, None)
                .await;
        }
    };

    let mut tx = pool.begin().await?;

    let artist_exists = sqlx::query_scalar::<_, i64>("SELECT id FROM artists WHERE id = ?")
        .bind(show.artist_id)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();
    let venue_exists = sqlx::query_scalar::<_, i64>("SELECT id FROM venues WHERE id = ?")
        .bind(show.venue_id)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

    let missing = match (artist_exists, venue_exists) {
        (false, _) => Some("This artist id doesn't exist"),
        (_, false) => Some("This venue id doesn't exist."),
        _ => None,
    };
    if let Some(message) = missing {
        drop(tx);
        return render_form(&pool, StatusCode::UNPROCESSABLE_ENTITY, &form, &FieldErrors::new(), Some(message))
            .await;
    }

    sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(show.artist_id)
        .bind(show.venue_id)
        .bind(show.start_time)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create show: {:?}", e);
            AppError::from(e)
        })?;

    tx.commit().await?;
    tracing::info!("Listed show: artist {} at venue {}", show.artist_id, show.venue_id);

    Ok(render_home(&pool, Some("Show was successfully listed!")).await?.into_response())
}
