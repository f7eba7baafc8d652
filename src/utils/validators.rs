//! Field-level checks shared by the booking forms.
//!
//! Normalizers return the rewritten value; checks return `()`. The
//! `validate_*` adapters plug them into `#[derive(Validate)]` DTOs.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;
use validator::ValidationError;

use crate::utils::phone::{self, UsPhoneNumber};

/// Genres a venue or artist may list.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

static HAS_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NotANumber,
    InvalidUrl,
    NotFacebookLink,
    InvalidPhoneNumber,
    PhoneStateMismatch,
    InvalidDateTime,
}

impl FieldError {
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::NotANumber => "not_a_number",
            FieldError::InvalidUrl => "invalid_url",
            FieldError::NotFacebookLink => "not_facebook_link",
            FieldError::InvalidPhoneNumber => "invalid_phone_number",
            FieldError::PhoneStateMismatch => "phone_state_mismatch",
            FieldError::InvalidDateTime => "invalid_datetime",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FieldError::NotANumber => "This must be a number",
            FieldError::InvalidUrl => "Please enter a valid url.",
            FieldError::NotFacebookLink => "This isn't a facebook link.",
            FieldError::InvalidPhoneNumber => "Not a valid number.",
            FieldError::PhoneStateMismatch => {
                "The phone number does not match the state selected."
            }
            FieldError::InvalidDateTime => "Not a valid datetime value.",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for FieldError {}

impl From<FieldError> for ValidationError {
    fn from(err: FieldError) -> Self {
        ValidationError::new(err.code()).with_message(Cow::Owned(err.to_string()))
    }
}

/// Fails when the value is made of letters only.
pub fn check_numeric_string(value: &str) -> Result<(), FieldError> {
    if !value.is_empty() && value.chars().all(char::is_alphabetic) {
        return Err(FieldError::NotANumber);
    }
    Ok(())
}

/// Rewrites a loose link into an absolute `https://` URL.
///
/// * No scheme: `https://` is prepended.
/// * No host marker (`//`): the leading segment is the host, and `www.` is
///   prepended unless it is already there.
///
/// Already-normalized input is returned unchanged.
pub fn normalize_url(input: &str) -> Result<String, FieldError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FieldError::InvalidUrl);
    }

    let rewritten = if HAS_SCHEME.is_match(input) {
        input.to_string()
    } else if let Some(rest) = input.strip_prefix("//") {
        format!("https://{rest}")
    } else if input.starts_with("www.") {
        format!("https://{input}")
    } else {
        format!("https://www.{input}")
    };

    let parsed = Url::parse(&rewritten).map_err(|_| FieldError::InvalidUrl)?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(rewritten),
        _ => Err(FieldError::InvalidUrl),
    }
}

/// Fails unless the normalized link points at `www.facebook.com`.
pub fn check_facebook_url(input: &str) -> Result<(), FieldError> {
    let normalized = normalize_url(input)?;
    let parsed = Url::parse(&normalized).map_err(|_| FieldError::InvalidUrl)?;
    let host = parsed.host_str().unwrap_or_default();
    if !host.contains("www.facebook.com") {
        return Err(FieldError::NotFacebookLink);
    }
    Ok(())
}

/// Parses a US phone number and returns it in national format.
pub fn normalize_phone(input: &str) -> Result<String, FieldError> {
    UsPhoneNumber::parse(input)
        .map(|n| n.national())
        .map_err(|_| FieldError::InvalidPhoneNumber)
}

/// Fails when the phone's area code belongs to a state other than `state`.
pub fn check_phone_state(input: &str, state: &str) -> Result<(), FieldError> {
    let number = UsPhoneNumber::parse(input).map_err(|_| FieldError::InvalidPhoneNumber)?;
    match number.state_code() {
        Some(code) if code.eq_ignore_ascii_case(state.trim()) => Ok(()),
        _ => Err(FieldError::PhoneStateMismatch),
    }
}

pub fn validate_numeric_string(value: &str) -> Result<(), ValidationError> {
    check_numeric_string(value).map_err(Into::into)
}

pub fn validate_url(value: &str) -> Result<(), ValidationError> {
    normalize_url(value).map(|_| ()).map_err(Into::into)
}

pub fn validate_facebook_url(value: &str) -> Result<(), ValidationError> {
    check_facebook_url(value).map_err(Into::into)
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    normalize_phone(value).map(|_| ()).map_err(Into::into)
}

pub fn validate_state(value: &str) -> Result<(), ValidationError> {
    if !phone::is_state_code(value) {
        return Err(ValidationError::new("invalid_state")
            .with_message(Cow::Borrowed("Please select a state.")));
    }
    Ok(())
}

pub fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.is_empty() {
        return Err(ValidationError::new("genres_required")
            .with_message(Cow::Borrowed("Please pick at least one genre.")));
    }
    if let Some(bad) = genres.iter().find(|g| !GENRES.contains(&g.as_str())) {
        let mut err = ValidationError::new("invalid_genre")
            .with_message(Cow::Borrowed("Not a valid choice."));
        err.add_param(Cow::Borrowed("value"), bad);
        return Err(err);
    }
    Ok(())
}
