// src/models/artist.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{prelude::FromRow, types::Json};
use validator::{Validate, ValidationError};

use crate::models::form::FormFields;
use crate::utils::validators::{
    self, FieldError, validate_facebook_url, validate_genres, validate_phone, validate_state,
    validate_url,
};

/// Represents the 'artists' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: i64,

    /// Unique across artists.
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Json<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub joined: NaiveDateTime,
}

/// Artist create/edit form.
#[derive(Debug, Clone, Default, Validate)]
#[validate(schema(function = validate_artist_phone_state))]
pub struct ArtistForm {
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "The city must be shorter than 120 characters."))]
    pub city: String,
    #[validate(custom(function = validate_state))]
    pub state: String,
    #[validate(length(max = 120), custom(function = validate_phone))]
    pub phone: Option<String>,
    #[validate(length(max = 500), custom(function = validate_url))]
    pub image_link: Option<String>,
    #[validate(custom(function = validate_genres))]
    pub genres: Vec<String>,
    #[validate(custom(function = validate_facebook_url))]
    pub facebook_link: Option<String>,
    #[validate(length(max = 120), custom(function = validate_url))]
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    #[validate(length(max = 500))]
    pub seeking_description: Option<String>,
}

fn validate_artist_phone_state(form: &ArtistForm) -> Result<(), ValidationError> {
    match &form.phone {
        Some(phone) => validators::check_phone_state(phone, &form.state).map_err(Into::into),
        None => Ok(()),
    }
}

impl From<&FormFields> for ArtistForm {
    fn from(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state").to_ascii_uppercase(),
            phone: fields.optional("phone"),
            image_link: fields.optional("image_link"),
            genres: fields.all("genres"),
            facebook_link: fields.optional("facebook_link"),
            website_link: fields.optional("website_link"),
            seeking_venue: fields.checkbox("seeking_venue"),
            seeking_description: fields.optional("seeking_description"),
        }
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            image_link: artist.image_link.clone(),
            genres: artist.genres.0.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

/// Column values written on insert/update.
#[derive(Debug, Clone)]
pub struct ArtistRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl TryFrom<ArtistForm> for ArtistRecord {
    type Error = FieldError;

    fn try_from(form: ArtistForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form.name,
            city: form.city,
            state: form.state,
            phone: form.phone.as_deref().map(validators::normalize_phone).transpose()?,
            image_link: form.image_link.as_deref().map(validators::normalize_url).transpose()?,
            genres: form.genres,
            facebook_link: form
                .facebook_link
                .as_deref()
                .map(validators::normalize_url)
                .transpose()?,
            website_link: form.website_link.as_deref().map(validators::normalize_url).transpose()?,
            seeking_venue: form.seeking_venue,
            seeking_description: form.seeking_description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_map_onto_artist_form() {
        let fields = FormFields::new(vec![
            ("name".into(), "Guns N Petals".into()),
            ("city".into(), "San Francisco".into()),
            ("state".into(), "ca".into()),
            ("phone".into(), "".into()),
            ("genres".into(), "Rock n Roll".into()),
            ("seeking_venue".into(), "y".into()),
        ]);
        let form = ArtistForm::from(&fields);
        assert_eq!(form.state, "CA");
        assert_eq!(form.phone, None);
        assert!(form.seeking_venue);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn missing_genres_and_bad_state_are_reported() {
        let form = ArtistForm {
            name: "Nobody".into(),
            city: "Nowhere".into(),
            state: "ZZ".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("state"));
        assert!(fields.contains_key("genres"));
    }
}
