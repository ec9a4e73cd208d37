use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::modules::store::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// List all categories ordered by id.
    ///
    /// A failed read is reported as unprocessable; an empty table as not found.
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.store.list_categories().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Unprocessable("failed to read categories".to_string())
        })?;

        if categories.is_empty() {
            return Err(AppError::NotFound("No categories found".to_string()));
        }

        Ok(categories.into_iter().map(Into::into).collect())
    }
}
