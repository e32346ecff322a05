use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use std::sync::Arc;

use leadline_core::{Lead, LeadDetail};
use leadline_storage::LeadStats;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{CreateLeadRequest, UpdateLeadRequest, parse_body};
use crate::blocking::{blocking_json, blocking_result};
use crate::query_types::LeadListQuery;
use crate::response_types::DeleteResponse;

pub async fn list_leads(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LeadListQuery>, QueryRejection>,
) -> Result<Json<Vec<Lead>>, ApiError> {
    let Query(query) = query?;
    let Some(filter) = query.to_filter() else {
        return Ok(Json(Vec::new()));
    };
    let leads = Arc::clone(&state.lead_service);
    blocking_json(move || leads.list(&filter)).await
}

pub async fn lead_stats(State(state): State<Arc<AppState>>) -> Result<Json<LeadStats>, ApiError> {
    let leads = Arc::clone(&state.lead_service);
    blocking_json(move || leads.stats()).await
}

pub async fn get_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LeadDetail>, ApiError> {
    let leads = Arc::clone(&state.lead_service);
    blocking_json(move || leads.get(&id)).await
}

pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Lead>), ApiError> {
    let input = parse_body::<CreateLeadRequest>(&body)?.into_new_lead()?;
    let leads = Arc::clone(&state.lead_service);
    let lead = blocking_result(move || leads.create(input)).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

pub async fn update_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Lead>, ApiError> {
    let patch = parse_body::<UpdateLeadRequest>(&body)?.into_patch()?;
    let leads = Arc::clone(&state.lead_service);
    blocking_json(move || leads.update(&id, patch)).await
}

pub async fn delete_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let leads = Arc::clone(&state.lead_service);
    blocking_result(move || leads.delete(&id)).await?;
    Ok(Json(DeleteResponse { success: true }))
}
