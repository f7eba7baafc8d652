// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{self, artists, categories, home, questions, quiz, shows, venues},
    state::AppState,
};

/// Trivia JSON API.
fn trivia_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route("/categories/questions", post(categories::questions_by_category))
        .route("/categories/{id}/questions", get(categories::get_category_questions))
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{id}", axum::routing::delete(questions::delete_question))
        .route("/search", post(questions::search_questions))
        .route("/quizzes", post(quiz::play_quiz))
}

/// Server-rendered booking site.
fn booking_routes() -> Router<AppState> {
    let venue_routes = Router::new()
        .route("/", get(venues::list_venues))
        .route("/search", post(venues::search_venues))
        .route(
            "/create",
            get(venues::create_venue_form).post(venues::create_venue),
        )
        .route("/{id}", get(venues::show_venue).delete(venues::delete_venue))
        .route("/{id}/delete", post(venues::delete_venue))
        .route("/{id}/edit", get(venues::edit_venue_form).post(venues::edit_venue));

    let artist_routes = Router::new()
        .route("/", get(artists::list_artists))
        .route("/search", post(artists::search_artists))
        .route(
            "/create",
            get(artists::create_artist_form).post(artists::create_artist),
        )
        .route("/{id}", get(artists::show_artist).delete(artists::delete_artist))
        .route("/{id}/delete", post(artists::delete_artist))
        .route("/{id}/edit", get(artists::edit_artist_form).post(artists::edit_artist));

    let show_routes = Router::new()
        .route("/", get(shows::list_shows))
        .route("/create", get(shows::create_show_form).post(shows::create_show));

    Router::new()
        .route("/", get(home::index))
        .nest("/venues", venue_routes)
        .nest("/artists", artist_routes)
        .nest("/shows", show_routes)
        .nest_service("/static", ServeDir::new("static"))
}

/// Assembles the main application router.
///
/// * Merges the trivia API and the booking site (their paths do not overlap).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .merge(trivia_routes())
        .merge(booking_routes())
        .fallback(handlers::not_found)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
