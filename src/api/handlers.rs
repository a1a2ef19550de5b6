use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use tracing::{error, info};

use crate::orchestrator::Orchestrator;
use crate::{AppState, Domain};

use super::error::ApiError;
use super::models::{AnswerRequest, AnswerResponse, AskForm, ErrorResponse};
use super::page::{self, FormState, Outcome};

/// Validates the inputs, then runs the orchestrator. Every early return here
/// happens before any outbound request.
async fn answer_question(
    state: &AppState,
    question: &str,
    domain: Domain,
    submitted_key: Option<&str>,
) -> Result<String, ApiError> {
    if question.is_empty() {
        return Err(ApiError::MissingQuestion);
    }
    let api_key = state
        .config
        .resolve_api_key(submitted_key)
        .ok_or(ApiError::MissingApiKey)?;

    info!(%domain, "answering question");
    let orchestrator = Orchestrator {
        http: &state.http,
        endpoints: &state.config.endpoints,
        completion: state.completion.as_ref(),
        prompt_style: state.config.prompt_style,
    };
    orchestrator
        .build_answer(question, domain, &api_key)
        .await
        .map_err(|err| {
            error!(%domain, error = %err, "completion failed");
            ApiError::from(err)
        })
}

pub async fn index() -> Html<String> {
    Html(page::render(&FormState::default(), &Outcome::Empty))
}

pub async fn submit(State(state): State<Arc<AppState>>, Form(form): Form<AskForm>) -> Response {
    let mut echoed = FormState {
        question: form.question.clone(),
        domain: Domain::default(),
    };

    let result = match form.domain.parse::<Domain>() {
        Ok(domain) => {
            echoed.domain = domain;
            answer_question(&state, &form.question, domain, Some(&form.api_key)).await
        }
        Err(err) => Err(ApiError::from(err)),
    };

    match result {
        Ok(answer) => Html(page::render(&echoed, &Outcome::Answer(answer))).into_response(),
        Err(err) => {
            let outcome = if err.is_warning() {
                Outcome::Warning(err.to_string())
            } else {
                Outcome::Failure(err.to_string())
            };
            (err.status(), Html(page::render(&echoed, &outcome))).into_response()
        }
    }
}

pub async fn answer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let domain = match payload.domain.as_deref() {
        Some(name) => name.parse::<Domain>()?,
        None => Domain::default(),
    };

    let answer =
        answer_question(&state, &payload.question, domain, payload.api_key.as_deref()).await?;

    Ok(Json(AnswerResponse {
        answer,
        domain,
        model: state.completion.model().to_string(),
    }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
