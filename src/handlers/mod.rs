// src/handlers/mod.rs

pub mod artists;
pub mod categories;
pub mod home;
pub mod questions;
pub mod quiz;
pub mod shows;
pub mod venues;

use crate::error::AppError;

/// Fallback for unmatched routes, in the API's JSON error shape.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
