//! Helpers for running blocking service calls in async handlers.
//!
//! Storage is synchronous `SQLite`, so every service call goes through
//! `spawn_blocking`. These helpers fold the join error and the service
//! error into one `ApiError`.

use axum::Json;
use leadline_service::ServiceError;
use serde::Serialize;
use tokio::task::spawn_blocking;

use crate::api_error::ApiError;

/// Runs a blocking closure and returns its value.
///
/// # Example
/// ```ignore
/// let leads = Arc::clone(&state.lead_service);
/// let lead = blocking_result(move || leads.create(input)).await?;
/// ```
pub async fn blocking_result<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("blocking task failed: {e}")))?
        .map_err(ApiError::from)
}

/// Runs a blocking closure and wraps its value in `Json`.
pub async fn blocking_json<T, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static + Serialize,
{
    blocking_result(f).await.map(Json)
}
