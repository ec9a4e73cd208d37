use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::questions::models::CategoryKey;
use crate::modules::store::TriviaStore;
use crate::shared::constants::ALL_CATEGORIES_ID;

/// Whether a quiz category id falls outside the stored category ids.
///
/// Evaluated as `id > max || (id < min && id != 0)`: only the lower bound
/// exempts the "any category" id, so `0` is rejected when `max < 0`.
pub fn category_out_of_range(id: i32, min: i32, max: i32) -> bool {
    id > max || (id < min && id != ALL_CATEGORIES_ID)
}

/// Service for picking quiz questions
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Pick a random question not in `previous_questions`.
    ///
    /// Returns `Ok(None)` once every eligible question has been asked.
    pub async fn next_question(
        &self,
        category_id: i32,
        previous_questions: &[i32],
    ) -> Result<Option<QuestionResponseDto>> {
        let bounds = self.store.category_id_bounds().await.map_err(|e| {
            tracing::error!("Failed to read category bounds: {:?}", e);
            AppError::Internal("failed to read category bounds".to_string())
        })?;

        let Some((min, max)) = bounds else {
            return Err(AppError::NotFound("No categories available".to_string()));
        };

        if category_out_of_range(category_id, min, max) {
            return Err(AppError::NotFound(format!(
                "Quiz category {} outside [{}, {}]",
                category_id, min, max
            )));
        }

        let category =
            (category_id != ALL_CATEGORIES_ID).then(|| CategoryKey::from(category_id));

        let question = self
            .store
            .random_question(category.as_ref(), previous_questions)
            .await
            .map_err(|e| {
                tracing::error!("Failed to pick quiz question: {:?}", e);
                AppError::Internal("failed to pick quiz question".to_string())
            })?;

        if question.is_none() {
            tracing::debug!(
                "Quiz pool exhausted: category={}, asked={}",
                category_id,
                previous_questions.len()
            );
        }

        Ok(question.map(Into::into))
    }
}
