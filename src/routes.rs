// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{categories, questions, quiz},
    state::AppState,
};

/// Assembles the application router.
///
/// * Category, question, search and quiz routes.
/// * JSON 404 for anything unmatched.
/// * Global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::questions_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/search_questions", post(questions::search_questions))
        .route("/quizzes", post(quiz::next_question))
        .fallback(|| async { AppError::NotFound })
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
