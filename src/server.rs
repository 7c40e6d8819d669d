use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::types::{VerifyRequest, VerifyResponse};
use crate::api::Verifier;
use crate::config::VerifierConfig;
use crate::error::VerifyError;

pub struct AppState {
    pub verifier: Arc<Verifier>,
}

pub async fn verify_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, VerifyError> {
    let content = request.content.unwrap_or_default();
    let decision = state.verifier.verify(&content).await?;
    Ok(Json(decision))
}

async fn root_handler() -> &'static str {
    "Claim verifier is running"
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/verify", post(verify_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(config: VerifierConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState {
        verifier: Arc::new(Verifier::from_config(&config)),
    });

    let app = build_router(state);

    // Bind on all interfaces so the service is reachable from outside a container
    let addr = format!("0.0.0.0:{}", config.port);
    info!("Server running on http://{}", addr);
    info!(
        "Model backend {} ({}); NewsAPI {}; Bing News {}",
        config.model_base_url,
        config.model,
        if config.newsapi_key.is_some() { "enabled" } else { "disabled" },
        if config.bing_news_key.is_some() { "enabled" } else { "disabled" },
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await
}
