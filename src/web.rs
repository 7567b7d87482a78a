use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::{self, AppContext};
use crate::catalog::Catalog;
use crate::config::PathfinderConfig;
use crate::state::AppState;

/// Full application router: JSON API under `/api`, frontend as fallback
pub fn app(config: &PathfinderConfig, catalog: Catalog) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::new(
        config.defaults.pathfinder_mode,
        config.defaults.trailhead_mode,
    );

    Router::new()
        .nest("/api", api::router(AppContext::new(catalog, state)))
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(config: &PathfinderConfig, catalog: Catalog) -> Result<()> {
    let app = app(config, catalog);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.server.port);
    axum::serve(listener, app).await.context("Web server failed")?;
    Ok(())
}
