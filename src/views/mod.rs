//! Server-rendered pages of the booking site.

pub mod artists;
pub mod components;
pub mod home;
pub mod shows;
pub mod venues;

use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

fn header() -> Markup {
    html! {
        header {
            nav {
                a href="/" { strong { "Fyyur" } }
                a href="/venues" { "Venues" }
                a href="/artists" { "Artists" }
                a href="/shows" { "Shows" }
            }
        }
    }
}

/// Wraps `body` in the site layout. `flash` is shown above the content.
pub fn page(title: &str, flash: Option<&str>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                link rel="stylesheet" href="/static/main.css";
                title { (title) " | Fyyur" }
            }
            body {
                (header())
                @if let Some(message) = flash {
                    p.flash role="alert" { (message) }
                }
                main { (body) }
            }
        }
    }
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");
    page(
        title,
        None,
        html! {
            h1 { (status.as_u16()) " " (title) }
            p { (message) }
            a href="/" { "Back home" }
        },
    )
}
