use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreResult, TriviaRepository};
use crate::models::{
    category::Category,
    question::{CreateQuestionRequest, Question},
};

/// PostgreSQL-backed repository.
#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE wildcards so the term only matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl TriviaRepository for PgRepository {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn questions_in_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
    }

    async fn insert_question(&self, question: &CreateQuestionRequest) -> StoreResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.difficulty)
        .bind(question.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
