use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::quizzes::handlers;
use crate::features::quizzes::services::QuizService;

/// Create routes for the quizzes feature
pub fn routes(service: Arc<QuizService>) -> Router {
    Router::new()
        .route("/quizzes", post(handlers::next_question))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::memory::MemoryStore;
    use crate::shared::test_helpers::test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn science_and_art() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::with_categories(&["Science", "Art"]));
        store.add_question("What is H2O?", "Water", 1, 1);
        store.add_question("Who painted Guernica?", "Picasso", 2, 2);
        store.add_question("What is the speed of light?", "299792458 m/s", 1, 4);
        store.add_question("Which museum houses the Mona Lisa?", "The Louvre", 2, 1);
        store
    }

    fn server(store: Arc<MemoryStore>) -> TestServer {
        let service = Arc::new(QuizService::new(store));
        TestServer::new(test_app(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_quiz_question_matches_category() {
        let server = server(science_and_art());

        for _ in 0..10 {
            let response = server
                .post("/quizzes")
                .json(&json!({"previous_questions": [], "quiz_category": {"id": 1}}))
                .await;

            response.assert_status_ok();
            let body = response.json::<Value>();
            assert_eq!(body["success"], true);
            assert_eq!(body["question"]["category"], "1");
        }
    }

    #[tokio::test]
    async fn test_quiz_never_repeats_previous_questions() {
        let server = server(science_and_art());
        let mut asked: Vec<i64> = Vec::new();

        for _ in 0..4 {
            let body = server
                .post("/quizzes")
                .json(&json!({"previous_questions": &asked, "quiz_category": {"id": 0}}))
                .await
                .json::<Value>();

            let id = body["question"]["id"].as_i64().unwrap();
            assert!(!asked.contains(&id));
            asked.push(id);
        }

        let exhausted = server
            .post("/quizzes")
            .json(&json!({"previous_questions": &asked, "quiz_category": {"id": 0}}))
            .await;

        exhausted.assert_status_ok();
        assert_eq!(
            exhausted.json::<Value>(),
            json!({"success": true, "question": null})
        );
    }

    #[tokio::test]
    async fn test_quiz_category_above_max_is_not_found() {
        let response = server(science_and_art())
            .post("/quizzes")
            .json(&json!({"previous_questions": [], "quiz_category": {"id": 3}}))
            .await;

        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["error"], 404);
    }

    #[tokio::test]
    async fn test_quiz_category_below_min_is_not_found() {
        let response = server(science_and_art())
            .post("/quizzes")
            .json(&json!({"previous_questions": [], "quiz_category": {"id": -2}}))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_quiz_missing_keys_is_bad_request() {
        let server = server(science_and_art());

        let response = server
            .post("/quizzes")
            .json(&json!({"quiz_category": {"id": 1}}))
            .await;
        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>()["errors"],
            json!(["previous_questions is required"])
        );

        let response = server
            .post("/quizzes")
            .json(&json!({"previous_questions": [], "quiz_category": {}}))
            .await;
        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>()["errors"],
            json!(["quiz_category.id is required"])
        );
    }

    #[tokio::test]
    async fn test_quiz_store_failure_is_internal_error() {
        let store = science_and_art();
        store.set_failing(true);
        let response = server(store)
            .post("/quizzes")
            .json(&json!({"previous_questions": [], "quiz_category": {"id": 0}}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
