// tests/booking_tests.rs

mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::{test_pool, test_state};
use fyyur_trivia::create_router;
use sqlx::SqlitePool;
use tower::ServiceExt;

async fn app() -> (Router, SqlitePool) {
    let pool = test_pool().await;
    (create_router(test_state(pool.clone())), pool)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

const HOP: &str = "name=The+Musical+Hop&city=San+Francisco&state=CA\
&address=1015+Folsom+Street&phone=415-555-2671&genres=Jazz&genres=Reggae\
&facebook_link=facebook.com%2FTheMusicalHop&website_link=themusicalhop.com\
&seeking_talent=y&seeking_description=Looking+for+local+jazz";

const GUNS: &str = "name=Guns+N+Petals&city=San+Francisco&state=CA\
&phone=(415)+555-0199&genres=Rock+n+Roll&seeking_venue=y";

#[tokio::test]
async fn venue_create_list_edit_delete() {
    let (app, pool) = app().await;

    let (status, html) = post_form(&app, "/venues/create", HOP).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Welcome, The Musical Hop to the site."));
    assert!(html.contains("/venues/1"));

    let (phone, facebook, genres): (String, String, String) =
        sqlx::query_as("SELECT phone, facebook_link, genres FROM venues WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(phone, "(415) 555-2671");
    assert_eq!(facebook, "https://www.facebook.com/TheMusicalHop");
    assert_eq!(genres, r#"["Jazz","Reggae"]"#);

    let (status, html) = get(&app, "/venues").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("San Francisco, CA"));
    assert!(html.contains("The Musical Hop"));

    let (status, html) = post_form(&app, "/venues/create", HOP).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(html.contains("This location already exist."));

    let edited = HOP.replace("The+Musical+Hop", "The+Dueling+Pianos");
    let (status, _) = post_form(&app, "/venues/1/edit", &edited).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let (_, html) = get(&app, "/venues/1").await;
    assert!(html.contains("The Dueling Pianos"));

    let (status, html) = post_form(&app, "/venues/1/delete", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Venue The Dueling Pianos was successfully deleted."));

    let (status, _) = get(&app, "/venues/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn venue_form_errors_are_rendered() {
    let (app, pool) = app().await;

    // 212 is a New York area code
    let wrong_state = HOP.replace("415-555-2671", "212-555-0100");
    let (status, html) = post_form(&app, "/venues/create", &wrong_state).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("The phone number does not match the state selected."));

    let not_facebook = HOP.replace("facebook.com%2FTheMusicalHop", "twitter.com%2Fhop");
    let (status, html) = post_form(&app, "/venues/create", &not_facebook).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("This isn&#39;t a facebook link.") || html.contains("This isn't a facebook link."));

    let bad_phone = HOP.replace("415-555-2671", "not-a-number");
    let (status, html) = post_form(&app, "/venues/create", &bad_phone).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("Not a valid number."));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn artist_names_are_unique() {
    let (app, _pool) = app().await;

    let (status, html) = post_form(&app, "/artists/create", GUNS).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Artist: Guns N Petals was successfully listed!"));

    let (status, html) = post_form(&app, "/artists/create", GUNS).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(html.contains("This artist already exist"));

    let (status, html) = post_form(&app, "/artists/search", "search_term=petals").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Guns N Petals"));
    assert!(html.contains(": 1"));
}

#[tokio::test]
async fn search_wildcards_match_literally() {
    let (app, _pool) = app().await;
    post_form(&app, "/venues/create", HOP).await;
    post_form(&app, "/artists/create", GUNS).await;

    for uri in ["/venues/search", "/artists/search"] {
        for term in ["%25", "_"] {
            let (status, html) = post_form(&app, uri, &format!("search_term={}", term)).await;
            assert_eq!(status, StatusCode::OK);
            assert!(html.contains(": 0"), "{} {}", uri, term);
            assert!(!html.contains("The Musical Hop") && !html.contains("Guns N Petals"));
        }
    }

    let (_, html) = post_form(&app, "/venues/search", "search_term=hop").await;
    assert!(html.contains("The Musical Hop"));
    assert!(html.contains(": 1"));
}

#[tokio::test]
async fn shows_link_existing_artists_and_venues() {
    let (app, _pool) = app().await;
    post_form(&app, "/venues/create", HOP).await;
    post_form(&app, "/artists/create", GUNS).await;

    let (status, html) = post_form(
        &app,
        "/shows/create",
        "artist_id=42&venue_id=1&start_time=2035-04-01+20%3A00%3A00",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("This artist id doesn&#39;t exist") || html.contains("This artist id doesn't exist"));

    let (status, html) = post_form(
        &app,
        "/shows/create",
        "artist_id=abc&venue_id=1&start_time=2035-04-01+20%3A00%3A00",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("This must be a number"));

    let (status, html) = post_form(
        &app,
        "/shows/create",
        "artist_id=1&venue_id=1&start_time=2035-04-01+20%3A00%3A00",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Show was successfully listed!"));

    let (_, html) = get(&app, "/shows").await;
    assert!(html.contains("Guns N Petals"));
    assert!(html.contains("The Musical Hop"));

    let (_, html) = get(&app, "/venues/1").await;
    assert!(html.contains("1 Upcoming Shows"));
    assert!(html.contains("0 Past Shows"));

    // deleting the artist cascades to the show
    post_form(&app, "/artists/1/delete", "").await;
    let (_, html) = get(&app, "/venues/1").await;
    assert!(html.contains("0 Upcoming Shows"));
}

#[tokio::test]
async fn home_lists_recent_arrivals() {
    let (app, _pool) = app().await;
    post_form(&app, "/venues/create", HOP).await;
    post_form(&app, "/artists/create", GUNS).await;

    let (status, html) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    let artist_at = html.find("Guns N Petals").expect("artist missing");
    let venue_at = html.find("The Musical Hop").expect("venue missing");
    assert!(artist_at < venue_at, "newest arrival should come first");
}
