//! Trivia questions: listing, search, creation and deletion.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Paginated listing with all categories |
//! | POST | `/questions` | Add a question |
//! | DELETE | `/questions/{question_id}` | Delete a question |
//! | POST | `/questions/search` | Case-insensitive substring search |
//! | GET | `/categories/{category_id}/questions` | Questions of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
