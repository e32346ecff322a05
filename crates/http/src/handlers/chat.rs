use axum::{Json, body::Bytes, extract::State};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{ChatRequest, parse_body};
use crate::blocking::blocking_result;
use crate::response_types::ChatResponse;

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let req = parse_body::<ChatRequest>(&body)?;
    let Some(message) = req.message.filter(|m| !m.trim().is_empty()) else {
        return Err(ApiError::BadRequest("message is required".to_owned()));
    };
    let chat = Arc::clone(&state.chat_service);
    let lead_id = req.lead_id;
    let turn = blocking_result(move || chat.handle_message(&message, lead_id)).await?;
    Ok(Json(turn.into()))
}
