// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::prelude::FromRow;

/// Represents the 'questions' table in the database.
///
/// Every column except `id` is nullable: questions are stored exactly as
/// submitted, so a missing field comes back as `null`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: Option<String>,
    pub answer: Option<String>,
    /// Category id. Not checked against the categories table.
    pub category: Option<i64>,
    pub difficulty: Option<i32>,
}

/// DTO for creating a new question.
///
/// Numbers may arrive as strings (`"3"`), as form-driven clients send them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Page of questions as returned by the listing endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage<'a> {
    pub success: bool,
    pub questions: &'a [Question],
    pub total_questions: usize,
}
