// src/api/mod.rs — HTTP API for the editor extension

pub mod error;
pub mod handlers;
pub mod types;
pub mod validation;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::infra::config::{AppConfig, Config, ServerConfig};
use crate::provider::ModelProvider;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub provider: Arc<dyn ModelProvider>,
    /// Model (or Azure deployment) name sent with every completion.
    pub model: String,
    /// Service identity reported by `/health`.
    pub app: AppConfig,
}

impl ApiState {
    pub fn new(provider: Arc<dyn ModelProvider>, config: &Config) -> Self {
        Self {
            provider,
            model: config.model.model.clone(),
            app: config.app.clone(),
        }
    }
}

/// Build the axum router with all API routes.
pub fn build_router(state: ApiState, config: &ServerConfig) -> Router {
    let generation = Router::new()
        .route("/annotate/", post(handlers::annotate))
        .route("/explain/", post(handlers::explain))
        .route("/analyse/", post(handlers::analyse))
        .route("/revise/", post(handlers::revise))
        .route("/define/", post(handlers::define))
        .route("/create-pdf/", post(handlers::generate_pdf))
        .route("/generate-pdf/", post(handlers::generate_pdf));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/generation", generation)
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Serve until Ctrl-C.
pub async fn start_server(config: &ServerConfig, state: ApiState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let router = build_router(state, config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API server listening on http://{addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for shutdown signal: {e}");
            }
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}
