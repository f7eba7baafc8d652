use maud::{Markup, html};

use crate::models::{artist::Artist, artist::ArtistForm, show::ShowListing};
use crate::views::components::{
    FieldErrors, checkbox, form_errors, genre_tags, genres_select, optional_input, search_form,
    state_select, text_input,
};
use crate::views::page;

pub fn list(artists: &[Artist], flash: Option<&str>) -> Markup {
    page(
        "Artists",
        flash,
        html! {
            h1 { "Artists" }
            (search_form("/artists/search", "Find an artist", ""))
            a href="/artists/create" { "List a new artist" }
            ul {
                @for artist in artists {
                    li { a href=(format!("/artists/{}", artist.id)) { (artist.name) } }
                }
            }
        },
    )
}

pub fn search_results(term: &str, results: &[Artist]) -> Markup {
    page(
        "Artist search",
        None,
        html! {
            (search_form("/artists/search", "Find an artist", term))
            h3 { "Number of search results for \"" (term) "\": " (results.len()) }
            ul {
                @for artist in results {
                    li { a href=(format!("/artists/{}", artist.id)) { (artist.name) } }
                }
            }
        },
    )
}

fn show_list(shows: &[ShowListing]) -> Markup {
    html! {
        @for show in shows {
            div.card {
                a href=(format!("/venues/{}", show.venue_id)) { (show.venue_name) }
                " " (show.start_time.format("%a %b %d, %Y %l:%M%P").to_string())
            }
        }
    }
}

pub fn detail(
    artist: &Artist,
    upcoming: &[ShowListing],
    past: &[ShowListing],
    flash: Option<&str>,
) -> Markup {
    page(
        &artist.name,
        flash,
        html! {
            h1 { (artist.name) }
            p.subtitle { "ID: " (artist.id) }
            (genre_tags(&artist.genres))
            p { (artist.city) ", " (artist.state) }
            @if let Some(phone) = &artist.phone { p { (phone) } }
            @if let Some(link) = &artist.website_link { p { a href=(link) { (link) } } }
            @if let Some(link) = &artist.facebook_link { p { a href=(link) { (link) } } }
            @if artist.seeking_venue {
                div.card {
                    strong { "Currently seeking performance venues" }
                    @if let Some(desc) = &artist.seeking_description { p { (desc) } }
                }
            } @else {
                p { "Not currently seeking performance venues" }
            }
            @if let Some(img) = &artist.image_link { img src=(img) alt="Artist image"; }

            h2 { (upcoming.len()) " Upcoming Shows" }
            (show_list(upcoming))
            h2 { (past.len()) " Past Shows" }
            (show_list(past))

            a href=(format!("/artists/{}/edit", artist.id)) { "Edit" }
            form method="post" action=(format!("/artists/{}/delete", artist.id)) {
                button type="submit" { "Delete artist" }
            }
        },
    )
}

pub fn form(
    artist_id: Option<i64>,
    form: &ArtistForm,
    errors: &FieldErrors,
    flash: Option<&str>,
) -> Markup {
    let (title, action) = match artist_id {
        Some(id) => ("Edit artist", format!("/artists/{id}/edit")),
        None => ("List a new artist", "/artists/create".to_string()),
    };
    page(
        title,
        flash,
        html! {
            h1 { (title) }
            (form_errors(errors))
            form method="post" action=(action) {
                (text_input("Name", "name", &form.name, errors))
                (text_input("City", "city", &form.city, errors))
                (state_select(&form.state, errors))
                (optional_input("Phone", "phone", form.phone.as_deref(), errors))
                (genres_select(&form.genres, errors))
                (optional_input("Image link", "image_link", form.image_link.as_deref(), errors))
                (optional_input("Facebook link", "facebook_link", form.facebook_link.as_deref(), errors))
                (optional_input("Website", "website_link", form.website_link.as_deref(), errors))
                (checkbox("Seeking venue", "seeking_venue", form.seeking_venue))
                (optional_input("Seeking description", "seeking_description", form.seeking_description.as_deref(), errors))
                button type="submit" { "Save" }
            }
        },
    )
}
