use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreResult, TriviaRepository};
use crate::models::{
    category::Category,
    question::{CreateQuestionRequest, Question},
};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i64,
}

/// In-process repository with the same query semantics as [`super::PgRepository`].
///
/// Rows are kept in id order, so listings need no sorting.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store preloaded with the given rows.
    pub fn with_data(mut categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        categories.sort_by_key(|c| c.id);
        questions.sort_by_key(|q| q.id);
        let next_question_id = questions.last().map_or(1, |q| q.id + 1);

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        }
    }
}

#[async_trait]
impl TriviaRepository for MemoryRepository {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.tables.read().await.questions.clone())
    }

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn questions_in_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.category == Some(category_id))
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| {
                q.question
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: &CreateQuestionRequest) -> StoreResult<i64> {
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id.max(1);
        tables.next_question_id = id + 1;
        tables.questions.push(Question {
            id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        });
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() != before)
    }
}
