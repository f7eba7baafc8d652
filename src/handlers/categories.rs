// src/handlers/categories.rs

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    extractors::{ApiJson, ApiPath, ApiQuery},
    models::{
        category::{Category, formatted_list},
        question::{CategoryFilterRequest, Question},
    },
    utils::pagination::{PageParams, paginate},
};

/// Loads every category ordered by id.
pub(crate) async fn fetch_categories(pool: &SqlitePool) -> Result<Vec<Category>, AppError> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch categories: {:?}", e);
            AppError::from(e)
        })
}

/// `{id: label}` map; ids serialize as JSON object keys.
pub(crate) fn categories_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.label.clone()))
        .collect()
}

/// Lists all categories.
pub async fn list_categories(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let categories = fetch_categories(&pool).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "categories": categories_map(&categories),
        "formatted_list": formatted_list(&categories),
    })))
}

async fn questions_in_category(
    pool: &SqlitePool,
    category_id: i64,
) -> Result<Vec<Question>, AppError> {
    let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM categories WHERE id = ?")
        .bind(category_id)
        .fetch_optional(pool)
        .await?;
    if exists.is_none() {
        return Err(AppError::NotFound(format!("Category {} not found", category_id)));
    }

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE category = ?
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch questions for category {}: {:?}", category_id, e);
        AppError::from(e)
    })?;

    Ok(questions)
}

/// `POST /categories/questions` with `{category}`.
/// An empty page is a successful empty listing.
pub async fn questions_by_category(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<PageParams>,
    ApiJson(req): ApiJson<CategoryFilterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let questions = questions_in_category(&pool, req.category).await?;
    let page = paginate(&questions, params.page());

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": page,
        "totalQuestions": questions.len(),
        "category": req.category,
    })))
}

/// `GET /categories/{id}/questions`. Like `GET /questions`, an empty page is 404.
pub async fn get_category_questions(
    State(pool): State<SqlitePool>,
    ApiPath(category_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = questions_in_category(&pool, category_id).await?;
    let page = paginate(&questions, params.page());
    if page.is_empty() {
        return Err(AppError::NotFound("Not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": page,
        "totalQuestions": questions.len(),
        "category": category_id,
    })))
}
