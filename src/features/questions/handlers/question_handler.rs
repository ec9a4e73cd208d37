use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, CreateQuestionDto, QuestionPageResponseDto,
    QuestionSearchResponseDto, SearchQuestionsDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery, SuccessResponse};
use crate::shared::validation::validate_body;

/// List questions, ten per page
///
/// Pages past the last one are reported as 404 rather than an empty list.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionPageResponseDto),
        (status = 404, description = "Empty page or no categories", body = ErrorResponse),
        (status = 422, description = "Questions could not be read", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionPageResponseDto>> {
    let page = service.list_page(query.page()).await?;
    Ok(Json(page))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = SuccessResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 500, description = "Delete failed", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(question_id): AppPath<i32>,
) -> Result<Json<SuccessResponse>> {
    service.delete(question_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Add a question
///
/// The id of the new question is not returned.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = SuccessResponse),
        (status = 400, description = "Missing or malformed fields", body = ErrorResponse),
        (status = 500, description = "Insert failed", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<SuccessResponse>> {
    validate_body(&dto)?;

    let question = dto
        .into_new_question()
        .ok_or_else(|| AppError::BadRequest("incomplete question".to_string()))?;

    service.create(question).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Search questions by a case-insensitive substring
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = QuestionSearchResponseDto),
        (status = 400, description = "Missing searchTerm", body = ErrorResponse),
        (status = 500, description = "Search failed", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<QuestionSearchResponseDto>> {
    validate_body(&dto)?;

    let term = dto.search_term.unwrap_or_default();
    let results = service.search(&term).await?;
    Ok(Json(results))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponseDto),
        (status = 404, description = "No questions in the category", body = ErrorResponse),
        (status = 500, description = "Questions could not be read", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions_by_category(
    State(service): State<Arc<QuestionService>>,
    AppPath(category_id): AppPath<i32>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let questions = service.list_by_category(category_id).await?;
    Ok(Json(questions))
}
