use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use leadline_core::ActivityFeedItem;

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking_json;
use crate::query_types::ActivitiesQuery;

pub async fn recent_activities(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ActivitiesQuery>, QueryRejection>,
) -> Result<Json<Vec<ActivityFeedItem>>, ApiError> {
    let Query(query) = query?;
    let leads = Arc::clone(&state.lead_service);
    let limit = query.capped_limit();
    blocking_json(move || leads.recent_activities(limit)).await
}
