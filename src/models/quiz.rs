// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use super::question::Question;

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// Category the quiz is played in. Id `0` means "all categories".
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    // The web client posts ids as strings.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i64,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(i64),
}

impl QuizCategory {
    pub fn filter(&self) -> CategoryFilter {
        if self.id == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(self.id)
        }
    }
}

/// Response of `POST /quizzes`. `question` is omitted once the quiz is complete.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}
