mod error;
mod handlers;
mod models;
mod page;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use error::ApiError;
pub use handlers::{answer, index, not_found, submit};
pub use models::{AnswerRequest, AnswerResponse, AskForm, ErrorResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/api/answer", post(answer))
        .fallback(not_found)
        .with_state(state)
}
