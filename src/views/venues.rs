use maud::{Markup, html};

use crate::models::{show::ShowListing, venue::Venue, venue::VenueForm};
use crate::utils::listing::Area;
use crate::views::components::{
    FieldErrors, checkbox, form_errors, genre_tags, genres_select, optional_input, search_form,
    state_select, text_input,
};
use crate::views::page;

pub fn list(areas: &[Area], flash: Option<&str>) -> Markup {
    page(
        "Venues",
        flash,
        html! {
            h1 { "Venues" }
            (search_form("/venues/search", "Find a venue", ""))
            a href="/venues/create" { "List a new venue" }
            @for area in areas {
                section.card {
                    h3 { (area.city) ", " (area.state) }
                    ul {
                        @for venue in &area.venues {
                            li { a href=(format!("/venues/{}", venue.id)) { (venue.name) } }
                        }
                    }
                }
            }
        },
    )
}

pub fn search_results(term: &str, results: &[Venue]) -> Markup {
    page(
        "Venue search",
        None,
        html! {
            (search_form("/venues/search", "Find a venue", term))
            h3 { "Number of search results for \"" (term) "\": " (results.len()) }
            ul {
                @for venue in results {
                    li { a href=(format!("/venues/{}", venue.id)) { (venue.name) } }
                }
            }
        },
    )
}

fn show_list(shows: &[ShowListing]) -> Markup {
    html! {
        @for show in shows {
            div.card {
                a href=(format!("/artists/{}", show.artist_id)) { (show.artist_name) }
                " " (show.start_time.format("%a %b %d, %Y %l:%M%P").to_string())
            }
        }
    }
}

pub fn detail(
    venue: &Venue,
    upcoming: &[ShowListing],
    past: &[ShowListing],
    flash: Option<&str>,
) -> Markup {
    page(
        &venue.name,
        flash,
        html! {
            h1 { (venue.name) }
            p.subtitle { "ID: " (venue.id) }
            (genre_tags(&venue.genres))
            p { (venue.address) ", " (venue.city) ", " (venue.state) }
            @if let Some(phone) = &venue.phone { p { (phone) } }
            @if let Some(link) = &venue.website_link { p { a href=(link) { (link) } } }
            @if let Some(link) = &venue.facebook_link { p { a href=(link) { (link) } } }
            @if venue.seeking_talent {
                div.card {
                    strong { "Currently seeking talent" }
                    @if let Some(desc) = &venue.seeking_description { p { (desc) } }
                }
            } @else {
                p { "Not currently seeking talent" }
            }
            @if let Some(img) = &venue.image_link { img src=(img) alt="Venue image"; }

            h2 { (upcoming.len()) " Upcoming Shows" }
            (show_list(upcoming))
            h2 { (past.len()) " Past Shows" }
            (show_list(past))

            a href=(format!("/venues/{}/edit", venue.id)) { "Edit" }
            form method="post" action=(format!("/venues/{}/delete", venue.id)) {
                button type="submit" { "Delete venue" }
            }
        },
    )
}

/// Create form when `venue_id` is `None`, edit form otherwise.
pub fn form(
    venue_id: Option<i64>,
    form: &VenueForm,
    errors: &FieldErrors,
    flash: Option<&str>,
) -> Markup {
    let (title, action) = match venue_id {
        Some(id) => ("Edit venue", format!("/venues/{id}/edit")),
        None => ("List a new venue", "/venues/create".to_string()),
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
                (text_input("Address", "address", &form.address, errors))
                (optional_input("Phone", "phone", form.phone.as_deref(), errors))
                (genres_select(&form.genres, errors))
                (optional_input("Image link", "image_link", form.image_link.as_deref(), errors))
                (optional_input("Facebook link", "facebook_link", form.facebook_link.as_deref(), errors))
                (optional_input("Website", "website_link", form.website_link.as_deref(), errors))
                (checkbox("Seeking talent", "seeking_talent", form.seeking_talent))
                (optional_input("Seeking description", "seeking_description", form.seeking_description.as_deref(), errors))
                button type="submit" { "Save" }
            }
        },
    )
}
