// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;

use crate::{
    error::AppError,
    models::{
        category::{CategoryMap, category_map},
        pagination::PageParams,
        question::{CreateQuestionRequest, Question, QuestionPage, SearchRequest},
    },
    repository::DynRepository,
    utils::{
        extract::{AppJson, AppPath},
        paginate::paginate,
    },
};

/// Marker sent as `currentCategory` when no category filter is active.
const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionListResponse<'a> {
    success: bool,
    questions: &'a [Question],
    total_questions: usize,
    categories: CategoryMap,
    current_category: &'static str,
}

/// Lists one page of all questions together with the category map.
/// Responds 404 when the page is empty.
pub async fn list_questions(
    State(repo): State<DynRepository>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = repo.list_questions().await?;
    let page = paginate(params.page(), &questions);

    if page.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = repo.list_categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page,
        total_questions: questions.len(),
        categories: category_map(categories),
        current_category: ALL_CATEGORIES,
    })
    .into_response())
}

/// Creates a question from the posted fields.
///
/// Fields are stored as given; absent ones become NULL. A failed insert or a
/// wrongly typed field is reported as 422.
pub async fn create_question(
    State(repo): State<DynRepository>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = repo.insert_question(&payload).await.map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::Unprocessable(e.to_string())
    })?;

    tracing::info!(question_id = id, "Question created");

    Ok(Json(json!({ "success": true })))
}

/// Deletes a question by ID.
/// 404 if it does not exist, 422 if the store refuses the delete.
pub async fn delete_question(
    State(repo): State<DynRepository>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = repo.delete_question(id).await.map_err(|e| {
        tracing::error!("Failed to delete question {}: {:?}", id, e);
        AppError::Unprocessable(e.to_string())
    })?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    tracing::info!(question_id = id, "Question deleted");

    Ok(Json(json!({ "success": true })))
}

/// Case-insensitive substring search over question text, paginated.
/// An empty result is still a success.
pub async fn search_questions(
    State(repo): State<DynRepository>,
    Query(params): Query<PageParams>,
    AppJson(payload): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let term = payload.search_term.unwrap_or_default();
    let questions = repo.search_questions(&term).await?;

    Ok(Json(QuestionPage {
        success: true,
        questions: paginate(params.page(), &questions),
        total_questions: questions.len(),
    })
    .into_response())
}
