use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreResult, TriviaStore};
use crate::features::categories::models::Category;
use crate::features::questions::models::{CategoryKey, NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// PostgreSQL-backed trivia store
#[derive(Clone)]
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    async fn category_id_bounds(&self) -> StoreResult<Option<(i32, i32)>> {
        let (min, max): (Option<i32>, Option<i32>) =
            sqlx::query_as("SELECT MIN(id), MAX(id) FROM categories")
                .fetch_one(&self.pool)
                .await?;

        Ok(min.zip(max))
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn list_questions_in_category(
        &self,
        category: &CategoryKey,
    ) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ORDER BY id"
        ))
        .bind(format!("%{}%", term))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn find_question(&self, id: i32) -> StoreResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category.as_str())
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn random_question(
        &self,
        category: Option<&CategoryKey>,
        exclude: &[i32],
    ) -> StoreResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM questions
            WHERE ($1::TEXT IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY random()
            LIMIT 1
            "#
        ))
        .bind(category.map(CategoryKey::as_str))
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }
}
