use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::completion::CompletionError;
use crate::domain::UnknownDomain;

use super::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Please enter a question.")]
    MissingQuestion,
    #[error("Please enter your OpenAI API key.")]
    MissingApiKey,
    #[error(transparent)]
    UnknownDomain(#[from] UnknownDomain),
    #[error("Failed to generate an answer: {0}")]
    Completion(#[from] CompletionError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingQuestion | Self::MissingApiKey | Self::UnknownDomain(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Completion(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Warnings are user mistakes caught before any network call.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::Completion(_))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
