// src/handlers/quiz.rs

use std::collections::HashSet;

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    extractors::ApiJson,
    models::question::{PlayQuizRequest, Question},
    utils::quiz_selector::{QuizCategory, QuizOutcome, select_question},
};

/// Serves the next quiz question.
///
/// * `quiz_category.id == 0` plays across every category.
/// * Questions listed in `previous_questions` are never served again.
/// * When none are left, answers `{question: false}` so the client can end the quiz.
/// * Unknown or empty categories are a 422.
pub async fn play_quiz(
    State(pool): State<SqlitePool>,
    ApiJson(req): ApiJson<PlayQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch quiz questions: {:?}", e);
        AppError::from(e)
    })?;

    let category_ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM categories")
        .fetch_all(&pool)
        .await?;

    let category = QuizCategory::from_id(req.quiz_category.id);
    let previous: HashSet<i64> = req.previous_questions.iter().copied().collect();

    let outcome = select_question(
        questions,
        category,
        &category_ids,
        &previous,
        &mut rand::thread_rng(),
    )
    .inspect_err(|e| tracing::debug!("Quiz rejected for category {}: {}", category.id(), e))?;

    let body = match outcome {
        QuizOutcome::Active { question, unseen } => serde_json::json!({
            "success": true,
            "question": question,
            "previous_questions": req.previous_questions,
            "quiz": unseen,
        }),
        QuizOutcome::Exhausted => serde_json::json!({
            "success": true,
            "question": false,
            "previous_questions": req.previous_questions,
            "quiz": [],
        }),
    };

    Ok(Json(body))
}
