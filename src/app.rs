use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::{
    config::ServiceConfig,
    error::{ServiceError, ServiceResult},
    handlers,
};

pub fn build_router() -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", any(handlers::health))
        // ── Middleware ──────────────────────────────────────────────────────
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Acquire the service's TCP port. Failure here is fatal for the process.
pub async fn bind(config: &ServiceConfig) -> ServiceResult<TcpListener> {
    let addr = config.bind_addr();
    debug!(service = config.name, %addr, "Binding listener");
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })
}

/// Serve `/health` on an already bound listener. Only returns on error.
pub async fn serve(listener: TcpListener, config: &ServiceConfig) -> ServiceResult<()> {
    let port = listener.local_addr().map_err(ServiceError::Serve)?.port();
    info!("{} service running on :{}", config.title, port);

    axum::serve(listener, build_router())
        .await
        .map_err(ServiceError::Serve)
}

pub async fn run(config: &ServiceConfig) -> ServiceResult<()> {
    info!("── {} ──", config.name);
    let listener = bind(config).await?;
    serve(listener, config).await
}
