use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::memory::MemoryStore;
    use crate::shared::test_helpers::test_app;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server(store: Arc<MemoryStore>) -> TestServer {
        let service = Arc::new(CategoryService::new(store));
        TestServer::new(test_app(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_list_categories_ordered_by_id() {
        let store = Arc::new(MemoryStore::with_categories(&["Science", "Art"]));
        let response = server(store).get("/categories").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "success": true,
                "categories": [
                    {"id": 1, "type": "Science"},
                    {"id": 2, "type": "Art"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_list_categories_empty_is_not_found() {
        let response = server(Arc::new(MemoryStore::new())).get("/categories").await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<Value>(),
            json!({"success": false, "error": 404, "message": "resource not found"})
        );
    }

    #[tokio::test]
    async fn test_list_categories_store_failure_is_unprocessable() {
        let store = Arc::new(MemoryStore::with_categories(&["Science"]));
        store.set_failing(true);
        let response = server(store).get("/categories").await;

        response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["error"], 422);
        assert_eq!(response.json::<Value>()["message"], "unprocessable");
    }
}
