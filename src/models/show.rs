// src/models/show.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::prelude::FromRow;
use validator::{Validate, ValidationError};

use crate::models::form::FormFields;
use crate::utils::validators::{FieldError, check_numeric_string, validate_numeric_string};

/// Accepted `start_time` spellings: the form default and HTML `datetime-local`.
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A show joined with its artist and venue, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ShowForm {
    #[validate(
        length(min = 1, message = "This field is required."),
        custom(function = validate_numeric_string)
    )]
    pub artist_id: String,
    #[validate(
        length(min = 1, message = "This field is required."),
        custom(function = validate_numeric_string)
    )]
    pub venue_id: String,
    #[validate(custom(function = validate_start_time))]
    pub start_time: String,
}

pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn validate_start_time(value: &str) -> Result<(), ValidationError> {
    match parse_start_time(value) {
        Some(_) => Ok(()),
        None => Err(FieldError::InvalidDateTime.into()),
    }
}

impl From<&FormFields> for ShowForm {
    fn from(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id"),
            venue_id: fields.text("venue_id"),
            start_time: fields.text("start_time"),
        }
    }
}

/// Insertable show.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

fn parse_id(value: &str) -> Result<i64, FieldError> {
    check_numeric_string(value)?;
    value.trim().parse().map_err(|_| FieldError::NotANumber)
}

impl TryFrom<ShowForm> for NewShow {
    type Error = FieldError;

    fn try_from(form: ShowForm) -> Result<Self, Self::Error> {
        Ok(Self {
            artist_id: parse_id(&form.artist_id)?,
            venue_id: parse_id(&form.venue_id)?,
            start_time: parse_start_time(&form.start_time).ok_or(FieldError::InvalidDateTime)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_time_accepts_form_and_html_formats() {
        assert!(parse_start_time("2035-04-01 20:00:00").is_some());
        assert!(parse_start_time("2035-04-01T20:00").is_some());
        assert!(parse_start_time("April first").is_none());
    }

    #[test]
    fn alphabetic_ids_fail_validation() {
        let form = ShowForm {
            artist_id: "abc".into(),
            venue_id: "2".into(),
            start_time: "2035-04-01 20:00:00".into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("artist_id"));
    }

    #[test]
    fn valid_form_maps_to_new_show() {
        let form = ShowForm {
            artist_id: "4".into(),
            venue_id: " 2 ".into(),
            start_time: "2035-04-01 20:00:00".into(),
        };
        assert!(form.validate().is_ok());
        let show = NewShow::try_from(form).unwrap();
        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 2);
    }

    #[test]
    fn mixed_id_passes_check_but_not_mapping() {
        let form = ShowForm {
            artist_id: "4a".into(),
            venue_id: "2".into(),
            start_time: "2035-04-01 20:00:00".into(),
        };
        assert!(form.validate().is_ok());
        assert_eq!(NewShow::try_from(form), Err(FieldError::NotANumber));
    }
}
