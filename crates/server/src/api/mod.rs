use crate::sse::{self, SessionRegistry};
use crate::{streamable, TransportKind};
use anyhow::Result;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use stitcher_mcp::McpService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: McpService,
    pub sessions: SessionRegistry,
    pub shop: String,
}

impl AppState {
    pub fn new(service: McpService, shop: String) -> Self {
        Self {
            service,
            sessions: SessionRegistry::new(),
            shop,
        }
    }
}

/// Start the HTTP server with the selected transport binding.
pub async fn serve(addr: &str, state: AppState, transport: TransportKind) -> Result<()> {
    let app = create_router(state, transport);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Build the router for one transport binding.
pub fn create_router(state: AppState, transport: TransportKind) -> Router {
    let routes = match transport {
        TransportKind::Sse => Router::new()
            .route("/sse", get(sse::open_session))
            .route("/message", post(sse::post_message)),
        TransportKind::Streamable => Router::new().route("/mcp", post(streamable::post_mcp)),
    };

    routes
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint: static service identity plus the configured shop.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "stitcher",
        "shop": state.shop,
    }))
}

/// Resolves when SIGINT or SIGTERM arrives.
///
/// On Unix we listen for SIGTERM and Ctrl-C; elsewhere Ctrl-C only.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                tracing::error!("failed to register SIGTERM handler: {e}");
                tokio::signal::ctrl_c().await.ok();
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.ok();
    }
    tracing::info!("shutdown signal received");
}
