// src/handlers/venues.rs

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
        form::error_messages,
        show::ShowListing,
        venue::{Venue, VenueForm, VenueRecord},
    },
    utils::listing::{group_by_area, split_shows},
    views::{self, components::FieldErrors},
};

const DUPLICATE_LOCATION: &str = "This location already exist.";

async fn fetch_venue(pool: &SqlitePool, id: i64) -> Result<Venue, PageError> {
    sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)).into())
}

fn render_form(
    status: StatusCode,
    venue_id: Option<i64>,
    form: &VenueForm,
    errors: &FieldErrors,
    flash: Option<&str>,
) -> Response {
    let markup = views::venues::form(venue_id, form, errors, flash);
    (status, Html(markup.into_string())).into_response()
}

/// Lists venues grouped by city and state.
pub async fn list_venues(State(pool): State<SqlitePool>) -> Result<Html<String>, PageError> {
    let venues = sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY state, city, name")
        .fetch_all(&pool)
        .await?;

    Ok(Html(views::venues::list(&group_by_area(venues), None).into_string()))
}

/// Case-insensitive search over name, city, state and genres.
pub async fn search_venues(
    State(pool): State<SqlitePool>,
    HtmlForm(fields): HtmlForm,
) -> Result<Html<String>, PageError> {
    let term = fields.text("search_term");
    let pattern = like_pattern(&term);

    let results = sqlx::query_as::<_, Venue>(
        r#"
        SELECT * FROM venues
        WHERE name LIKE ?1 ESCAPE '\' OR city LIKE ?1 ESCAPE '\'
           OR state LIKE ?1 ESCAPE '\' OR genres LIKE ?1 ESCAPE '\'
        ORDER BY name
        "#,
    )
    .bind(&pattern)
    .fetch_all(&pool)
    .await?;

    Ok(Html(views::venues::search_results(&term, &results).into_string()))
}

/// Venue page with upcoming and past shows.
pub async fn show_venue(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let venue = fetch_venue(&pool, id).await?;

    let shows = sqlx::query_as::<_, ShowListing>(
        r#"
        SELECT
            s.id, s.start_time,
            a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
            v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        JOIN venues v ON v.id = s.venue_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time
        "#,
    )
    .bind(id)
    .fetch_all(&pool)
    .await?;

    let (upcoming, past) = split_shows(shows, chrono::Local::now().naive_local());
    Ok(Html(views::venues::detail(&venue, &upcoming, &past, None).into_string()))
}

pub async fn create_venue_form() -> Html<String> {
    Html(views::venues::form(None, &VenueForm::default(), &FieldErrors::new(), None).into_string())
}

/// Validates and inserts a venue. A duplicate address re-renders the form.
pub async fn create_venue(
    State(pool): State<SqlitePool>,
    HtmlForm(fields): HtmlForm,
) -> Result<Response, PageError> {
    let form = VenueForm::from(&fields);
    if let Err(validation_errors) = form.validate() {
        let errors = error_messages(&validation_errors);
        return Ok(render_form(StatusCode::UNPROCESSABLE_ENTITY, None, &form, &errors, None));
    }

    let record = VenueRecord::try_from(form.clone())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut tx = pool.begin().await?;
    let inserted = sqlx::query(
        r#"
        INSERT INTO venues
        (name, city, state, address, phone, image_link, genres, facebook_link,
         website_link, seeking_talent, seeking_description, joined)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.name)
    .bind(&record.city)
    .bind(&record.state)
    .bind(&record.address)
    .bind(&record.phone)
    .bind(&record.image_link)
    .bind(sqlx::types::Json(&record.genres))
    .bind(&record.facebook_link)
    .bind(&record.website_link)
    .bind(record.seeking_talent)
    .bind(&record.seeking_description)
    .bind(chrono::Local::now().naive_local())
    .execute(&mut *tx)
    .await;

    match inserted {
        Ok(_) => tx.commit().await?,
        Err(e) if is_unique_violation(&e) => {
            tracing::info!("Duplicate venue location: {}, {}", record.city, record.address);
            return Ok(render_form(
                StatusCode::CONFLICT,
                None,
                &form,
                &FieldErrors::new(),
                Some(DUPLICATE_LOCATION),
            ));
        }
        Err(e) => {
            tracing::error!("Failed to create venue: {:?}", e);
            return Err(e.into());
        }
    }

    tracing::info!("Created venue {}", record.name);
    let flash = format!("Welcome, {} to the site.", record.name);
    Ok(render_home(&pool, Some(&flash)).await?.into_response())
}

pub async fn edit_venue_form(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let venue = fetch_venue(&pool, id).await?;
    let form = VenueForm::from(&venue);
    Ok(Html(views::venues::form(Some(id), &form, &FieldErrors::new(), None).into_string()))
}

/// Validates and updates a venue, then redirects to its page.
pub async fn edit_venue(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    HtmlForm(fields): HtmlForm,
) -> Result<Response, PageError> {
    fetch_venue(&pool, id).await?;

    let form = VenueForm::from(&fields);
    if let Err(validation_errors) = form.validate() {
        let errors = error_messages(&validation_errors);
        return Ok(render_form(StatusCode::UNPROCESSABLE_ENTITY, Some(id), &form, &errors, None));
    }

    let record = VenueRecord::try_from(form.clone())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut tx = pool.begin().await?;
    let updated = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, image_link = ?,
            genres = ?, facebook_link = ?, website_link = ?, seeking_talent = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&record.name)
    .bind(&record.city)
    .bind(&record.state)
    .bind(&record.address)
    .bind(&record.phone)
    .bind(&record.image_link)
    .bind(sqlx::types::Json(&record.genres))
    .bind(&record.facebook_link)
    .bind(&record.website_link)
    .bind(record.seeking_talent)
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
                Some(DUPLICATE_LOCATION),
            ));
        }
        Err(e) => {
            tracing::error!("Failed to update venue {}: {:?}", id, e);
            return Err(e.into());
        }
    }

    tracing::info!("Updated venue {}", id);
    Ok(Redirect::to(&format!("/venues/{}", id)).into_response())
}

/// Deletes a venue and, through the foreign key, its shows.
pub async fn delete_venue(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, PageError> {
    let mut tx = pool.begin().await?;

    let name: String = sqlx::query_scalar("SELECT name FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

    sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete venue {}: {:?}", id, e);
            AppError::from(e)
        })?;

    tx.commit().await?;
    tracing::info!("Deleted venue {}", id);

    let flash = format!("Venue {} was successfully deleted.", name);
    Ok(render_home(&pool, Some(&flash)).await?.into_response())
}
