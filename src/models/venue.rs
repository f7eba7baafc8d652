// src/models/venue.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{prelude::FromRow, types::Json};
use validator::{Validate, ValidationError};

use crate::models::form::FormFields;
use crate::utils::validators::{
    self, FieldError, validate_facebook_url, validate_genres, validate_phone, validate_state,
    validate_url,
};

/// Represents the 'venues' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,

    /// Two-letter state code.
    pub state: String,
    pub address: String,

    /// National format, e.g. "(415) 555-2671".
    pub phone: Option<String>,
    pub image_link: Option<String>,

    /// Stored as a JSON array.
    pub genres: Json<Vec<String>>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub joined: NaiveDateTime,
}

/// Venue create/edit form.
#[derive(Debug, Clone, Default, Validate)]
#[validate(schema(function = validate_venue_phone_state))]
pub struct VenueForm {
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "The city must be between 1 and 120 characters."))]
    pub city: String,
    #[validate(custom(function = validate_state))]
    pub state: String,
    #[validate(length(min = 1, max = 120, message = "The address must be between 1 and 120 characters."))]
    pub address: String,
    #[validate(length(max = 120), custom(function = validate_phone))]
    pub phone: Option<String>,
    #[validate(length(max = 500), custom(function = validate_url))]
    pub image_link: Option<String>,
    #[validate(custom(function = validate_genres))]
    pub genres: Vec<String>,
    #[validate(length(max = 120), custom(function = validate_facebook_url))]
    pub facebook_link: Option<String>,
    #[validate(length(max = 120), custom(function = validate_url))]
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    #[validate(length(max = 500))]
    pub seeking_description: Option<String>,
}

fn validate_venue_phone_state(form: &VenueForm) -> Result<(), ValidationError> {
    match &form.phone {
        Some(phone) => validators::check_phone_state(phone, &form.state).map_err(Into::into),
        None => Ok(()),
    }
}

impl From<&FormFields> for VenueForm {
    fn from(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state").to_ascii_uppercase(),
            address: fields.text("address"),
            phone: fields.optional("phone"),
            image_link: fields.optional("image_link"),
            genres: fields.all("genres"),
            facebook_link: fields.optional("facebook_link"),
            website_link: fields.optional("website_link"),
            seeking_talent: fields.checkbox("seeking_talent"),
            seeking_description: fields.optional("seeking_description"),
        }
    }
}

/// Pre-fills the edit form from the stored row.
impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            genres: venue.genres.0.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

/// Column values written on insert/update. Phone and links are normalized.
#[derive(Debug, Clone)]
pub struct VenueRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl TryFrom<VenueForm> for VenueRecord {
    type Error = FieldError;

    fn try_from(form: VenueForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form.name,
            city: form.city,
            state: form.state,
            address: form.address,
            phone: form.phone.as_deref().map(validators::normalize_phone).transpose()?,
            image_link: form.image_link.as_deref().map(validators::normalize_url).transpose()?,
            genres: form.genres,
            facebook_link: form
                .facebook_link
                .as_deref()
                .map(validators::normalize_url)
                .transpose()?,
            website_link: form.website_link.as_deref().map(validators::normalize_url).transpose()?,
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> VenueForm {
        VenueForm {
            name: "The Musical Hop".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            phone: Some("415-555-2671".into()),
            genres: vec!["Jazz".into(), "Reggae".into()],
            facebook_link: Some("facebook.com/TheMusicalHop".into()),
            website_link: Some("themusicalhop.com".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_maps_to_normalized_record() {
        let form = valid_form();
        assert!(form.validate().is_ok());

        let record = VenueRecord::try_from(form).unwrap();
        assert_eq!(record.phone.as_deref(), Some("(415) 555-2671"));
        assert_eq!(
            record.facebook_link.as_deref(),
            Some("https://www.facebook.com/TheMusicalHop")
        );
        assert_eq!(record.website_link.as_deref(), Some("https://www.themusicalhop.com"));
    }

    #[test]
    fn phone_from_another_state_is_rejected() {
        let form = VenueForm {
            state: "NY".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.to_string().contains("phone_state_mismatch")
            || errors.to_string().contains("does not match"));
    }

    #[test]
    fn non_facebook_link_is_rejected() {
        let form = VenueForm {
            facebook_link: Some("https://twitter.com/hop".into()),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("facebook_link"));
    }
}
