//! `api` crate — HTTP REST API layer over the photo repository.
//!
//! Exposes:
//!   POST   /api/v1/photos
//!   GET    /api/v1/photos
//!   GET    /api/v1/photos/{id}
//!   DELETE /api/v1/photos/{id}
//!   GET    /api/v1/collages/{collage_id}/photos

pub mod handlers;
pub mod response;

use axum::{routing::get, Router};
use db::DbPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use response::MessageResponse;

/// Shared handler state.  Cloning only bumps the pool's reference count.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/photos",
            get(handlers::photos::list).post(handlers::photos::create),
        )
        .route(
            "/api/v1/photos/{id}",
            get(handlers::photos::get).delete(handlers::photos::delete),
        )
        .route(
            "/api/v1/collages/{collage_id}/photos",
            get(handlers::photos::list_by_collage),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to `bind` and serve until the process receives Ctrl-C.
pub async fn serve(bind: &str, pool: DbPool) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(AppState { pool }))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
