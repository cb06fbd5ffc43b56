use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::gemini,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("Message is required".to_string()));
    }

    // Configuration fault, checked before the upstream call is attempted.
    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(AppError::MissingApiKey)?;

    let mentor = state.mentors.resolve(payload.mentor_id.as_deref());
    tracing::debug!(mentor = mentor.name, "dispatching message to generation API");

    let reply = gemini::generate(
        &state.http,
        &state.config.api_url,
        api_key,
        message,
        &mentor.system_instruction(),
    )
    .await?;

    Ok(Json(ChatResponse { response: reply }))
}
