//! Request extractors whose rejections use this crate's error types.

use axum::{
    Form,
    extract::{FromRequest, FromRequestParts, Request},
};

use crate::error::{AppError, PageError};
use crate::models::form::FormFields;

/// `Json` whose rejection is rendered as the API's `{success: false, ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `Query` with the API error body on rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// `Path` whose rejection is a JSON 404: an id that does not parse names no row.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Url-encoded form body kept as raw pairs (multi-selects repeat their key).
#[derive(Debug)]
pub struct HtmlForm(pub FormFields);

impl<S> FromRequest<S> for HtmlForm
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
        Ok(HtmlForm(FormFields::new(pairs)))
    }
}
