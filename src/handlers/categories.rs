// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::{
    error::AppError,
    models::{
        category::{CategoryMap, category_map},
        pagination::PageParams,
        question::Question,
    },
    repository::DynRepository,
    utils::{extract::AppPath, paginate::paginate},
};

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: CategoryMap,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryQuestionsResponse<'a> {
    success: bool,
    questions: &'a [Question],
    total_questions: usize,
    current_category: String,
}

/// Lists every category as an `id -> type` map.
/// Responds 404 when no categories exist.
pub async fn list_categories(
    State(repo): State<DynRepository>,
) -> Result<impl IntoResponse, AppError> {
    let categories = repo.list_categories().await?;

    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// Lists one page of the questions filed under a category.
///
/// * 404 if the category does not exist.
/// * 404 if the requested page is empty (including categories with no questions).
pub async fn questions_by_category(
    State(repo): State<DynRepository>,
    AppPath(id): AppPath<i64>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let category = repo.find_category(id).await?.ok_or(AppError::NotFound)?;

    let questions = repo.questions_in_category(category.id).await?;
    let page = paginate(params.page(), &questions);

    if page.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page,
        total_questions: questions.len(),
        current_category: category.kind,
    })
    .into_response())
}
