use anyhow::Result;
use leadline_http::{AppState, create_router};
use leadline_storage::Storage;
use std::path::Path;
use std::sync::Arc;

pub(crate) async fn run(db_path: &Path, port: u16, host: &str) -> Result<()> {
    let storage = Arc::new(Storage::new(db_path)?);
    let state = Arc::new(AppState::new(storage));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
