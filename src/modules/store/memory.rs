use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rand::seq::SliceRandom;

use super::{StoreError, StoreResult, TriviaStore};
use crate::features::categories::models::Category;
use crate::features::questions::models::{CategoryKey, NewQuestion, Question};

/// In-memory store used by the endpoint tests.
///
/// `set_failing(true)` makes every call fail with a pool timeout.
#[derive(Default)]
pub struct MemoryStore {
    categories: Mutex<Vec<Category>>,
    questions: Mutex<Vec<Question>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(names: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut categories = store.categories.lock().unwrap();
            for (idx, name) in names.iter().enumerate() {
                categories.push(Category {
                    id: idx as i32 + 1,
                    category_type: name.to_string(),
                });
            }
        }
        store
    }

    pub fn add_question(&self, question: &str, answer: &str, category: i32, difficulty: i32) -> i32 {
        let mut questions = self.questions.lock().unwrap();
        let id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        questions.push(Question {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            category: CategoryKey::from(category),
            difficulty,
        });
        id
    }

    pub fn question_ids(&self) -> Vec<i32> {
        self.questions.lock().unwrap().iter().map(|q| q.id).collect()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

/// `LIKE` matching: `%` matches any run of characters, `_` exactly one.
fn like_match(text: &[char], pattern: &[char]) -> bool {
    match pattern.split_first() {
        None => text.is_empty(),
        Some((&'%', rest)) => (0..=text.len()).any(|skip| like_match(&text[skip..], rest)),
        Some((&'_', rest)) => !text.is_empty() && like_match(&text[1..], rest),
        Some((c, rest)) => text.first() == Some(c) && like_match(&text[1..], rest),
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.check()?;
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn category_id_bounds(&self) -> StoreResult<Option<(i32, i32)>> {
        self.check()?;
        let categories = self.categories.lock().unwrap();
        let min = categories.iter().map(|c| c.id).min();
        let max = categories.iter().map(|c| c.id).max();
        Ok(min.zip(max))
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap().clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn list_questions_in_category(
        &self,
        category: &CategoryKey,
    ) -> StoreResult<Vec<Question>> {
        Ok(self
            .list_questions()
            .await?
            .into_iter()
            .filter(|q| &q.category == category)
            .collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let pattern: Vec<char> = format!("%{}%", term.to_lowercase()).chars().collect();
        Ok(self
            .list_questions()
            .await?
            .into_iter()
            .filter(|q| {
                let text: Vec<char> = q.question.to_lowercase().chars().collect();
                like_match(&text, &pattern)
            })
            .collect())
    }

    async fn find_question(&self, id: i32) -> StoreResult<Option<Question>> {
        self.check()?;
        let questions = self.questions.lock().unwrap();
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i32> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        questions.push(Question {
            id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        });
        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() < before)
    }

    async fn random_question(
        &self,
        category: Option<&CategoryKey>,
        exclude: &[i32],
    ) -> StoreResult<Option<Question>> {
        let candidates: Vec<Question> = self
            .list_questions()
            .await?
            .into_iter()
            .filter(|q| category.map_or(true, |c| &q.category == c))
            .filter(|q| !exclude.contains(&q.id))
            .collect();

        Ok(candidates.choose(&mut rand::thread_rng()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(text: &str, pattern: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        like_match(&text, &pattern)
    }

    #[test]
    fn test_like_match_wildcards() {
        assert!(matches("what is h2o?", "%h_o%"));
        assert!(matches("what is h2o?", "%what%h2o%"));
        assert!(matches("abc", "abc"));
        assert!(matches("", "%"));
        assert!(!matches("what is ho?", "%h_o%"));
        assert!(!matches("abc", "ab"));
        assert!(!matches("ab", "a_c"));
    }
}
