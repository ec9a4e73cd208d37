//! Store handle for trivia data.
//!
//! Services receive an `Arc<dyn TriviaStore>` built once at startup. The
//! PostgreSQL implementation is the production backend; an in-memory
//! implementation backs the endpoint tests.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::categories::models::Category;
use crate::features::questions::models::{CategoryKey, NewQuestion, Question};

pub use postgres::PgTriviaStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait TriviaStore: Send + Sync + 'static {
    /// All categories ordered by id
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Smallest and largest category id, `None` when there are no categories
    async fn category_id_bounds(&self) -> StoreResult<Option<(i32, i32)>>;

    /// All questions ordered by id
    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    /// Questions of one category ordered by id
    async fn list_questions_in_category(&self, category: &CategoryKey)
        -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text.
    ///
    /// `%` and `_` in `term` are passed through unescaped.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn find_question(&self, id: i32) -> StoreResult<Option<Question>>;

    /// Insert a question and return its new id
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i32>;

    /// Delete a question, returning whether a row was removed
    async fn delete_question(&self, id: i32) -> StoreResult<bool>;

    /// One random question not in `exclude`, optionally restricted to a category
    async fn random_question(
        &self,
        category: Option<&CategoryKey>,
        exclude: &[i32],
    ) -> StoreResult<Option<Question>>;
}
