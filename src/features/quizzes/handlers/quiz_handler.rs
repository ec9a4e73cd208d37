use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;
use crate::shared::validation::validate_body;

/// Get the next quiz question
///
/// Picks a random question that is not in `previous_questions`, from the
/// given category or from all categories when `quiz_category.id` is 0.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or null when none remain", body = QuizResponseDto),
        (status = 400, description = "Missing or malformed fields", body = ErrorResponse),
        (status = 404, description = "Quiz category out of range", body = ErrorResponse),
        (status = 500, description = "Question could not be picked", body = ErrorResponse),
    ),
    tag = "quizzes"
)]
pub async fn next_question(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    validate_body(&dto)?;

    let (previous_questions, category_id) = match (dto.previous_questions, dto.quiz_category) {
        (Some(previous), Some(category)) => match category.id {
            Some(id) => (previous, id),
            None => return Err(AppError::BadRequest("quiz_category.id is required".to_string())),
        },
        _ => return Err(AppError::BadRequest("incomplete quiz request".to_string())),
    };

    let question = service
        .next_question(category_id, &previous_questions)
        .await?;

    Ok(Json(QuizResponseDto {
        success: true,
        question,
    }))
}
