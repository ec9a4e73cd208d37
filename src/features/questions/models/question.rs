use sqlx::FromRow;

use super::CategoryKey;

/// Database model for question
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: CategoryKey,
    pub difficulty: i32,
}

/// Fields of a question about to be inserted
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryKey,
    pub difficulty: i32,
}
