use serde::{Deserialize, Serialize};

use crate::Domain;

/// Body of `POST /api/answer`. `domain` is kept as text so an unknown value
/// yields a 400 with a message instead of a bare deserialisation failure.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub domain: Domain,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Fields submitted by the HTML form on `POST /`.
#[derive(Debug, Default, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub api_key: String,
}
