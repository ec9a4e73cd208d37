use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Category as exposed by the API: `{id, type}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub category_type: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            category_type: c.category_type,
        }
    }
}

/// Response for `GET /categories`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponseDto {
    pub success: bool,
    pub categories: Vec<CategoryResponseDto>,
}
