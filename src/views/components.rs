use std::collections::HashMap;

use maud::{Markup, html};

use crate::utils::{phone::STATES, validators::GENRES};

/// Field name -> messages, as produced by `models::form::error_messages`.
pub type FieldErrors = HashMap<String, Vec<String>>;

pub fn field_errors(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if let Some(messages) = errors.get(field) {
            ul.errors {
                @for m in messages { li { (m) } }
            }
        }
    }
}

/// Errors not tied to a single field (cross-field checks).
pub fn form_errors(errors: &FieldErrors) -> Markup {
    field_errors(errors, "__all__")
}

pub fn text_input(label: &str, name: &str, value: &str, errors: &FieldErrors) -> Markup {
    html! {
        label for=(name) { (label) }
        input type="text" id=(name) name=(name) value=(value);
        (field_errors(errors, name))
    }
}

pub fn optional_input(label: &str, name: &str, value: Option<&str>, errors: &FieldErrors) -> Markup {
    text_input(label, name, value.unwrap_or_default(), errors)
}

pub fn state_select(selected: &str, errors: &FieldErrors) -> Markup {
    html! {
        label for="state" { "State" }
        select id="state" name="state" {
            @for (code, _) in STATES {
                option value=(code) selected[*code == selected] { (code) }
            }
        }
        (field_errors(errors, "state"))
    }
}

pub fn genres_select(selected: &[String], errors: &FieldErrors) -> Markup {
    html! {
        label for="genres" { "Genres" }
        select id="genres" name="genres" multiple {
            @for genre in GENRES {
                option value=(genre) selected[selected.iter().any(|g| g == genre)] { (genre) }
            }
        }
        (field_errors(errors, "genres"))
    }
}

pub fn checkbox(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        label {
            input type="checkbox" name=(name) value="y" checked[checked];
            " " (label)
        }
    }
}

pub fn search_form(action: &str, placeholder: &str, term: &str) -> Markup {
    html! {
        form method="post" action=(action) {
            input type="search" name="search_term" placeholder=(placeholder) value=(term);
            button type="submit" { "Search" }
        }
    }
}

pub fn genre_tags(genres: &[String]) -> Markup {
    html! {
        p.genres {
            @for (i, g) in genres.iter().enumerate() {
                @if i > 0 { ", " }
                span { (g) }
            }
        }
    }
}
