use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::questions::dtos::QuestionResponseDto;

/// Category selector of a quiz; id `0` means any category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    pub id: Option<i32>,
}

/// Request DTO for the next quiz question
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct QuizRequestDto {
    /// Ids of questions already asked in this quiz
    #[validate(required(message = "previous_questions is required"))]
    pub previous_questions: Option<Vec<i32>>,

    #[validate(required(message = "quiz_category is required"))]
    pub quiz_category: Option<QuizCategoryDto>,
}

/// Response DTO for the next quiz question; `question` is null once the pool is exhausted
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    pub question: Option<QuestionResponseDto>,
}
