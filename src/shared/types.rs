use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body returned by operations that only report success
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Uniform error body: `{success: false, error: <status>, message: <text>}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
    /// Offending fields for a rejected request body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Query parameters for the paginated question listing.
///
/// `page` is parsed leniently: a missing or non-numeric value means page 1.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Slice out the window `[(page-1)*per_page, page*per_page)`.
///
/// Pages below 1 and pages past the end yield an empty window.
pub fn paginate<T>(items: Vec<T>, page: i64, per_page: usize) -> Vec<T> {
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(per_page));

    match start {
        Some(start) => items.into_iter().skip(start).take(per_page).collect(),
        None => Vec::new(),
    }
}
