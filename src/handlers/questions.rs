// src/handlers/questions.rs

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    extractors::{ApiJson, ApiPath, ApiQuery},
    handlers::categories::{categories_map, fetch_categories},
    models::{
        category::formatted_list,
        question::{CreateQuestionRequest, Question, SearchRequest, whole_number},
    },
    utils::pagination::{PageParams, paginate},
};

async fn fetch_all_questions(pool: &SqlitePool) -> Result<Vec<Question>, AppError> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch questions: {:?}", e);
        AppError::from(e)
    })
}

/// Lists questions, 10 per page, with the total count and categories.
/// An empty page is a 404.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = fetch_all_questions(&pool).await?;
    let page = paginate(&questions, params.page());
    if page.is_empty() {
        return Err(AppError::NotFound("Not found".to_string()));
    }

    let categories = fetch_categories(&pool).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": page,
        "total_questions": questions.len(),
        "categories": categories_map(&categories),
        "current_category": serde_json::Value::Null,
    })))
}

/// Deletes a question by ID and returns the remaining count.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::from(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Not found".to_string()));
    }

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!("Deleted question {}", id);

    Ok(Json(serde_json::json!({
        "success": true,
        "deleted": id,
        "total_questions": total,
    })))
}

/// Joins the messages of every failed field into one sentence.
fn describe(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .map(|e| match &e.message {
            Some(msg) => msg.to_string(),
            None => e.code.to_string(),
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages.join(" ")
}

/// Creates a question.
///
/// * question and answer must be non-blank.
/// * difficulty must be 1..=5.
/// * category must name a row of the category table.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    ApiJson(payload): ApiJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::ValidationFailed(describe(&validation_errors)));
    }

    let categories = fetch_categories(&pool).await?;
    let category = payload
        .category
        .as_ref()
        .and_then(whole_number)
        .filter(|id| categories.iter().any(|c| c.id == *id))
        .ok_or_else(|| {
            let max = categories.iter().map(|c| c.id).max().unwrap_or(0);
            AppError::ValidationFailed(format!(
                "The category must be a whole number between 1 and {}. The current list of categories are :{}",
                max,
                formatted_list(&categories)
            ))
        })?;

    let new_question = payload.into_new_question(category).ok_or_else(|| {
        AppError::ValidationFailed(
            "You are missing the question or answer body. Please try again.".to_string(),
        )
    })?;
    if new_question.question.is_empty() || new_question.answer.is_empty() {
        return Err(AppError::ValidationFailed(
            "You are missing the question or answer body. Please try again.".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&new_question.question)
    .bind(&new_question.answer)
    .bind(new_question.category)
    .bind(new_question.difficulty)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::from(e)
    })?;
    tx.commit().await?;

    tracing::info!("Created question {} in category {}", id, new_question.category);

    Ok(Json(serde_json::json!({
        "success": true,
        "id": id,
        "question": new_question.question,
        "answer": new_question.answer,
        "difficulty": new_question.difficulty,
        "category": new_question.category,
    })))
}

/// Escapes LIKE wildcards so the term matches literally.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Case-insensitive substring search over question text, paginated.
pub async fn search_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<PageParams>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let results = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE LOWER(question) LIKE LOWER(?) ESCAPE '\'
        ORDER BY id
        "#,
    )
    .bind(like_pattern(req.search_term.trim()))
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to search questions: {:?}", e);
        AppError::from(e)
    })?;

    let page = paginate(&results, params.page());

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": page,
        "totalQuestions": results.len(),
        "current_category": serde_json::Value::Null,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("title"), "%title%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }
}
