//! HTTP API server for leadline.

#![allow(clippy::missing_errors_doc, reason = "Handlers map errors to HTTP statuses")]

pub mod api_error;
mod api_types;
mod blocking;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use leadline_service::{ChatService, LeadService};
use leadline_storage::Storage;

pub use response_types::{ChatReply, ChatResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for sharing across handlers.
pub struct AppState {
    /// Lead CRUD, stats and activity feed
    pub lead_service: Arc<LeadService>,
    /// Chat capture
    pub chat_service: Arc<ChatService>,
}

impl AppState {
    /// Wire the services over one storage handle.
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        let lead_service = Arc::new(LeadService::new(Arc::clone(&storage)));
        let chat_service = Arc::new(ChatService::new(storage, Arc::clone(&lead_service)));
        Self { lead_service, chat_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/leads",
            get(handlers::leads::list_leads).post(handlers::leads::create_lead),
        )
        .route("/api/leads/stats", get(handlers::leads::lead_stats))
        .route(
            "/api/leads/{id}",
            get(handlers::leads::get_lead)
                .patch(handlers::leads::update_lead)
                .delete(handlers::leads::delete_lead),
        )
        .route("/api/chat", post(handlers::chat::send_message))
        .route("/api/activities", get(handlers::activities::recent_activities))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
