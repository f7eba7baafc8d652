// src/handlers/artists.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::{AppError, PageError, is_unique_violation},
    extractors::HtmlForm,
    handlers::{home::render_home, questions::like_pattern},
    models::{
        artist::{Artist, ArtistForm, ArtistRecord},
        form::error_messages,
        show::ShowListing,
    },
    utils::listing::split_shows,
    views::{self, components::FieldErrors},
};

const DUPLICATE_ARTIST: &str = "This artist already exist";

async fn fetch_artist(pool: &SqlitePool, id: i64) -> Result<Artist, PageError> {
    sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)).into())
}

fn render_form(
    status: StatusCode,
    artist_id: Option<i64>,
    form: &ArtistForm,
    errors: &FieldErrors,
    flash: Option<&str>,
) -> Response {
    let markup = views::artists::form(artist_id, form, errors, flash);
    (status, Html(markup.into_string())).into_response()
}

pub async fn list_artists(State(pool): State<SqlitePool>) -> Result<Html<String>, PageError> {
    let artists = sqlx::query_as::<_, Artist>("SELECT * FROM artists ORDER BY name")
        .fetch_all(&pool)
        .await?;

    Ok(Html(views::artists::list(&artists, None).into_string()))
}

/// Case-insensitive search over name, city, state and genres.
pub async fn search_artists(
    State(pool): State<SqlitePool>,
    HtmlForm(fields): HtmlForm,
) -> Result<Html<String>, PageError> {
    let term = fields.text("search_term");

    let results = sqlx::query_as::<_, Artist>(
        r#"
        SELECT * FROM artists
        WHERE name LIKE ?1 ESCAPE '\' OR city LIKE ?1 ESCAPE '\'
           OR state LIKE ?1 ESCAPE '\' OR genres LIKE ?1 ESCAPE '\'
        ORDER BY name
        "#,
    )
    .bind(like_pattern(&term))
    .fetch_all(&pool)
    .await?;

    Ok(Html(views::artists::search_results(&term, &results).into_string()))
}

pub async fn show_artist(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let artist = fetch_artist(&pool, id).await?;

    let shows = sqlx::query_as::<_, ShowListing>(
        r#"
        SELECT
            s.id, s.start_time,
            a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
            v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time
        "#,
    )
    .bind(id)
    .fetch_all(&pool)
    .await?;

    let (upcoming, past) = split_shows(shows, chrono::Local::now().naive_local());
    Ok(Html(views::artists::detail(&artist, &upcoming, &past, None).into_string()))
}

pub async fn create_artist_form() -> Html<String> {
    Html(views::artists::form(None, &ArtistForm::default(), &FieldErrors::new(), None).into_string())
}

/// Validates and inserts an artist. A taken name re-renders the form.
pub async fn create_artist(
    State(pool): State<SqlitePool>,
    HtmlForm(fields): HtmlForm,
) -> Result<Response, PageError> {
    let form = ArtistForm::from(&fields);
    if let Err(validation_errors) = form.validate() {
        let errors = error_messages(&validation_errors);
        return Ok(render_form(StatusCode::UNPROCESSABLE_ENTITY, None, &form, &errors, None));
    }

    let record = ArtistRecord::try_from(form.clone())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut tx = pool.begin().await?;
    let inserted = sqlx::query(
        r#"
        INSERT INTO artists
        (name, city, state, phone, genres, image_link, facebook_link,
         website_link, seeking_venue, seeking_description, joined)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.name)
    .bind(&record.city)
    .bind(&record.state)
    .bind(&record.phone)
    .bind(sqlx::types::Json(&record.genres))
    .bind(&record.image_link)
    .bind(&record.facebook_link)
    .bind(&record.website_link)
    .bind(record.seeking_venue)
    .bind(&record.seeking_description)
    .bind(chrono::Local::now().naive_local())
    .execute(&mut *tx)
    .await;

    match inserted {
        Ok(_) => tx.commit().await?,
        Err(e) if is_unique_violation(&e) => {
            tracing::info!("Duplicate artist name: {}", record.name);
            return Ok(render_form(
                StatusCode::CONFLICT,
                None,
                &form,
                &FieldErrors::new(),
                Some(DUPLICATE_ARTIST),
            ));
        }
        Err(e) => {
            tracing::error!("Failed to create artist: {:?}", e);
            return Err(e.into());
        }
    }

    tracing::info!("Created artist {}", record.name);
    let flash = format!("Artist: {} was successfully listed!", record.name);
    Ok(render_home(&pool, Some(&flash)).await?.into_response())
}

pub async fn edit_artist_form(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let artist = fetch_artist(&pool, id).await?;
    let form = ArtistForm::from(&artist);
    Ok(Html(views::artists::form(Some(id), &form, &FieldErrors::new(), None).into_string()))
}

pub async fn edit_artist(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    HtmlForm(fields): HtmlForm,
) -> Result<Response, PageError> {
    fetch_artist(&pool, id).await?;

    let form = ArtistForm::from(&fields);
    if let Err(validation_errors) = form.validate() {
        let errors = error_messages(&validation_errors);
        return Ok(render_form(StatusCode::UNPROCESSABLE_ENTITY, Some(id), &form, &errors, None));
    }

    let record = ArtistRecord::try_from(form.clone())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut tx = pool.begin().await?;
    let updated = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?, image_link = ?,
            facebook_link = ?, website_link = ?, seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&record.name)
    .bind(&record.city)
    .bind(&record.state)
    .bind(&record.phone)
    .bind(sqlx::types::Json(&record.genres))
    .bind(&record.image_link)
    .bind(&record.facebook_link)
    .bind(&record.website_link)
    .bind(record.seeking_venue)
    .bind(&record.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await;

    match updated {
        Ok(_) => tx.commit().await?,
        Err(e) if is_unique_violation(&e) => {
            return Ok(render_form(
                StatusCode::CONFLICT,
                Some(id),
                &form,
                &FieldErrors::new(),
                Some(DUPLICATE_ARTIST),
            ));
        }
        Err(e) => {
            tracing::error!("Failed to update artist {}: {:?}", id, e);
            return Err(e.into());
        }
    }

    tracing::info!("Updated artist {}", id);
    Ok(Redirect::to(&format!("/artists/{}", id)).into_response())
}

/// Deletes an artist together with their shows.
pub async fn delete_artist(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, PageError> {
    let mut tx = pool.begin().await?;

    let name: String = sqlx::query_scalar("SELECT name FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

    sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!("Deleted artist {}", id);

    let flash = format!("Artist {} was successfully deleted.", name);
    Ok(render_home(&pool, Some(&flash)).await?.into_response())
}
