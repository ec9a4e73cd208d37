/// Number of questions per page on the paginated question listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Quiz category id meaning "any category"
pub const ALL_CATEGORIES_ID: i32 = 0;

// =============================================================================
// CORS
// =============================================================================

/// Value of `Access-Control-Allow-Headers` attached to every response
pub const CORS_ALLOW_HEADERS: &str = "Content-Type,Authorization,true";

/// Value of `Access-Control-Allow-Methods` attached to every response
pub const CORS_ALLOW_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";
