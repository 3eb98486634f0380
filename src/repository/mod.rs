//! Data access for categories and questions.
//!
//! Handlers only ever talk to [`TriviaRepository`]; `PgRepository` backs the
//! running service and `MemoryRepository` serves tests and database-less runs.

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{CreateQuestionRequest, Question},
};

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Shared handle stored in the application state.
pub type DynRepository = Arc<dyn TriviaRepository>;

/// Typed queries over the trivia store. All listings are ordered by id.
#[async_trait]
pub trait TriviaRepository: Send + Sync {
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>>;

    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Questions whose `category` column equals `category_id`.
    async fn questions_in_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Inserts the question as given and returns its new id.
    async fn insert_question(&self, question: &CreateQuestionRequest) -> StoreResult<i64>;

    /// Returns `false` when no question had that id.
    async fn delete_question(&self, id: i64) -> StoreResult<bool>;
}
