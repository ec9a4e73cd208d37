use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::questions::models::{CategoryKey, NewQuestion, Question};

/// Question as exposed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: CategoryKey,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Request DTO for creating a question.
///
/// Every key is required; `category` may be sent as a number or a string.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(required(message = "question is required"))]
    pub question: Option<String>,

    #[validate(required(message = "answer is required"))]
    pub answer: Option<String>,

    #[validate(required(message = "difficulty is required"))]
    pub difficulty: Option<i32>,

    #[validate(required(message = "category is required"))]
    pub category: Option<CategoryKey>,
}

impl CreateQuestionDto {
    /// Convert a validated body into an insertable question
    pub fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            difficulty: self.difficulty?,
            category: self.category?,
        })
    }
}

/// Request DTO for searching questions
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuestionsDto {
    /// Case-insensitive substring of the question text
    #[validate(required(message = "searchTerm is required"))]
    pub search_term: Option<String>,
}

/// Response for the paginated question listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPageResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    /// Always null on this listing
    pub current_category: Option<CategoryKey>,
    pub categories: Vec<CategoryResponseDto>,
}

/// Response for a question search
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSearchResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    /// Always null on search results
    pub current_category: Option<CategoryKey>,
}

/// Response for the questions of one category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub current_category: CategoryKey,
    pub categories: Vec<CategoryResponseDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_question_accepts_numeric_category() {
        let dto: CreateQuestionDto = serde_json::from_value(json!({
            "question": "Who painted the Mona Lisa?",
            "answer": "Leonardo da Vinci",
            "difficulty": 2,
            "category": 2
        }))
        .unwrap();

        let new_question = dto.into_new_question().unwrap();
        assert_eq!(new_question.category.as_str(), "2");
        assert_eq!(new_question.difficulty, 2);
    }

    #[test]
    fn test_create_question_missing_keys_fail_validation() {
        let dto: CreateQuestionDto =
            serde_json::from_value(json!({"question": "Q?", "category": "1"})).unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("answer"));
        assert!(fields.contains_key("difficulty"));
        assert!(!fields.contains_key("question"));
        assert!(dto.into_new_question().is_none());
    }

    #[test]
    fn test_page_response_keeps_null_current_category() {
        let body = QuestionPageResponseDto {
            success: true,
            questions: vec![],
            total_questions: 0,
            current_category: None,
            categories: vec![],
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["currentCategory"], serde_json::Value::Null);
        assert_eq!(value["totalQuestions"], 0);
    }
}
