// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::prelude::FromRow;
use validator::{Validate, ValidationError};

const DIFFICULTY_MESSAGE: &str = "Difficulty must be a whole number between 1 and 5.";

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Foreign key into 'categories'.
    pub category: i64,

    /// 1 (easy) to 5 (hard).
    pub difficulty: i64,
}

/// DTO for creating a new question.
/// Every field is optional at the JSON level, and the numeric fields take any
/// JSON value, so that a missing or mistyped field is reported with a readable
/// message instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(
        required(message = "You are missing the question or answer body. Please try again."),
        length(min = 1, max = 1000, message = "You are missing the question or answer body. Please try again.")
    )]
    pub question: Option<String>,
    #[validate(
        required(message = "You are missing the question or answer body. Please try again."),
        length(min = 1, max = 1000, message = "You are missing the question or answer body. Please try again.")
    )]
    pub answer: Option<String>,
    #[validate(
        required(message = "Difficulty must be a whole number between 1 and 5."),
        custom(function = validate_difficulty)
    )]
    pub difficulty: Option<Value>,
    /// Checked against the category table by the handler.
    pub category: Option<Value>,
}

/// A JSON integer. Strings, floats and booleans are not whole numbers here.
pub fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64()
}

fn validate_difficulty(value: &Value) -> Result<(), ValidationError> {
    match whole_number(value) {
        Some(d) if (1..=5).contains(&d) => Ok(()),
        _ => Err(ValidationError::new("difficulty").with_message(DIFFICULTY_MESSAGE.into())),
    }
}

/// A question that passed validation, ready to insert.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl CreateQuestionRequest {
    /// Maps a validated request to the insertable row.
    /// `category` must already have been checked against the category table.
    pub fn into_new_question(self, category: i64) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?.trim().to_string(),
            answer: self.answer?.trim().to_string(),
            category,
            difficulty: self.difficulty.as_ref().and_then(whole_number)?,
        })
    }
}

/// Body of `POST /search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

/// Body of `POST /categories/questions`.
#[derive(Debug, Deserialize)]
pub struct CategoryFilterRequest {
    pub category: i64,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategoryRef {
    pub id: i64,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct PlayQuizRequest {
    pub quiz_category: QuizCategoryRef,
    #[serde(default)]
    pub previous_questions: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(q: Option<&str>, a: Option<&str>, d: Option<Value>) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: q.map(str::to_string),
            answer: a.map(str::to_string),
            difficulty: d,
            category: Some(json!(1)),
        }
    }

    #[test]
    fn difficulty_must_be_in_range() {
        assert!(request(Some("Q"), Some("A"), Some(json!(3))).validate().is_ok());
        assert!(request(Some("Q"), Some("A"), Some(json!(0))).validate().is_err());
        assert!(request(Some("Q"), Some("A"), Some(json!(6))).validate().is_err());
        assert!(request(Some("Q"), Some("A"), None).validate().is_err());
    }

    #[test]
    fn difficulty_must_be_a_json_integer() {
        for bad in [json!("3"), json!(2.5), json!("two"), json!(true), json!(null)] {
            let errors = request(Some("Q"), Some("A"), Some(bad.clone()))
                .validate()
                .expect_err("non-integer difficulty accepted");
            let fields = errors.field_errors();
            let field = fields["difficulty"];
            assert_eq!(field[0].message.as_deref(), Some(DIFFICULTY_MESSAGE), "{}", bad);
        }
    }

    #[test]
    fn question_and_answer_are_required() {
        assert!(request(None, Some("A"), Some(json!(1))).validate().is_err());
        assert!(request(Some("Q"), Some(""), Some(json!(1))).validate().is_err());
    }

    #[test]
    fn quiz_request_defaults_previous_questions() {
        let req: PlayQuizRequest =
            serde_json::from_str(r#"{"quiz_category": {"id": 0, "type": "click"}}"#).unwrap();
        assert_eq!(req.quiz_category.id, 0);
        assert!(req.previous_questions.is_empty());
    }
}
