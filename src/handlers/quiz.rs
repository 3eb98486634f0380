// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::quiz::{CategoryFilter, QuizRequest, QuizResponse},
    repository::DynRepository,
    utils::{extract::AppJson, quiz::select_question},
};

/// Serves the next quiz question.
///
/// Candidates are every question (category id 0) or those of the requested
/// category; ids in `previous_questions` are skipped. When nothing is left the
/// response carries no `question`, which tells the client the quiz is over.
pub async fn next_question(
    State(repo): State<DynRepository>,
    AppJson(req): AppJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let candidates = match req.quiz_category.filter() {
        CategoryFilter::All => repo.list_questions().await?,
        CategoryFilter::Only(id) => repo.questions_in_category(id).await?,
    };

    let question =
        select_question(&candidates, &req.previous_questions, &mut rand::thread_rng()).cloned();

    if question.is_none() {
        tracing::debug!(asked = req.previous_questions.len(), "Quiz complete");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
