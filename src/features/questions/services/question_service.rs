use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, QuestionPageResponseDto, QuestionResponseDto,
    QuestionSearchResponseDto,
};
use crate::features::questions::models::{CategoryKey, NewQuestion};
use crate::modules::store::{StoreError, TriviaStore};
use crate::shared::constants::QUESTIONS_PER_PAGE;
use crate::shared::types::paginate;

/// Service for question operations
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

fn internal(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |e| {
        tracing::error!("{}: {:?}", context, e);
        AppError::Internal(context.to_string())
    }
}

fn unprocessable(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |e| {
        tracing::error!("{}: {:?}", context, e);
        AppError::Unprocessable(context.to_string())
    }
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// One page of questions plus all categories.
    ///
    /// An empty window (including pages past the end) or an empty category
    /// table is reported as not found; read failures as unprocessable.
    pub async fn list_page(&self, page: i64) -> Result<QuestionPageResponseDto> {
        let questions = self
            .store
            .list_questions()
            .await
            .map_err(unprocessable("Failed to list questions"))?;
        let categories = self
            .store
            .list_categories()
            .await
            .map_err(unprocessable("Failed to list categories"))?;

        let total_questions = questions.len();
        let formatted: Vec<QuestionResponseDto> = questions.into_iter().map(Into::into).collect();
        let window = paginate(formatted, page, QUESTIONS_PER_PAGE);

        if window.is_empty() || categories.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions on page {} ({} total, {} categories)",
                page,
                total_questions,
                categories.len()
            )));
        }

        Ok(QuestionPageResponseDto {
            success: true,
            questions: window,
            total_questions,
            current_category: None,
            categories: categories.into_iter().map(Into::into).collect(),
        })
    }

    /// Delete a question by id
    pub async fn delete(&self, id: i32) -> Result<()> {
        let existing = self
            .store
            .find_question(id)
            .await
            .map_err(internal("Failed to look up question"))?;

        if existing.is_none() {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        let deleted = self
            .store
            .delete_question(id)
            .await
            .map_err(internal("Failed to delete question"))?;

        // The row vanished between lookup and delete
        if !deleted {
            return Err(AppError::Internal(format!(
                "Question {} was removed concurrently",
                id
            )));
        }

        tracing::info!("Question deleted: id={}", id);
        Ok(())
    }

    /// Insert a question, returning the new id
    pub async fn create(&self, question: NewQuestion) -> Result<i32> {
        let category = question.category.clone();
        let id = self
            .store
            .insert_question(question)
            .await
            .map_err(internal("Failed to create question"))?;

        tracing::info!("Question created: id={}, category={}", id, category);
        Ok(id)
    }

    /// Case-insensitive substring search over question text, unpaginated
    pub async fn search(&self, term: &str) -> Result<QuestionSearchResponseDto> {
        let questions = self
            .store
            .search_questions(term)
            .await
            .map_err(internal("Failed to search questions"))?;

        Ok(QuestionSearchResponseDto {
            success: true,
            total_questions: questions.len(),
            questions: questions.into_iter().map(Into::into).collect(),
            current_category: None,
        })
    }

    /// All questions of one category plus all categories
    pub async fn list_by_category(&self, category_id: i32) -> Result<CategoryQuestionsResponseDto> {
        let category = CategoryKey::from(category_id);

        let questions = self
            .store
            .list_questions_in_category(&category)
            .await
            .map_err(internal("Failed to list questions by category"))?;
        let categories = self
            .store
            .list_categories()
            .await
            .map_err(internal("Failed to list categories"))?;

        if questions.is_empty() || categories.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions in category {}",
                category
            )));
        }

        let categories: Vec<CategoryResponseDto> =
            categories.into_iter().map(Into::into).collect();

        Ok(CategoryQuestionsResponseDto {
            success: true,
            total_questions: questions.len(),
            questions: questions.into_iter().map(Into::into).collect(),
            current_category: category,
            categories,
        })
    }
}
