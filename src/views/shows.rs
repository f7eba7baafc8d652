use maud::{Markup, html};

use crate::models::{artist::Artist, show::ShowForm, show::ShowListing, venue::Venue};
use crate::views::components::{FieldErrors, field_errors, text_input};
use crate::views::page;

pub fn list(shows: &[ShowListing], flash: Option<&str>) -> Markup {
    page(
        "Shows",
        flash,
        html! {
            h1 { "Upcoming shows" }
            a href="/shows/create" { "List a new show" }
            @for show in shows {
                div.card {
                    a href=(format!("/artists/{}", show.artist_id)) { (show.artist_name) }
                    " at "
                    a href=(format!("/venues/{}", show.venue_id)) { (show.venue_name) }
                    " " (show.start_time.format("%a %b %d, %Y %l:%M%P").to_string())
                }
            }
        },
    )
}

pub fn form(
    form: &ShowForm,
    artists: &[Artist],
    venues: &[Venue],
    errors: &FieldErrors,
    flash: Option<&str>,
) -> Markup {
    page(
        "List a new show",
        flash,
        html! {
            h1 { "List a new show" }
            form method="post" action="/shows/create" {
                (text_input("Artist ID", "artist_id", &form.artist_id, errors))
                (text_input("Venue ID", "venue_id", &form.venue_id, errors))
                label for="start_time" { "Start time (YYYY-MM-DD HH:MM:SS)" }
                input type="text" id="start_time" name="start_time" value=(form.start_time);
                (field_errors(errors, "start_time"))
                button type="submit" { "Create show" }
            }
            h3 { "Artists" }
            ul { @for a in artists { li { (a.id) ": " (a.name) } } }
            h3 { "Venues" }
            ul { @for v in venues { li { (v.id) ": " (v.name) } } }
        },
    )
}
