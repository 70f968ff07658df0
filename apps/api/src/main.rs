mod analysis;
mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::predictor::WeightedScoringModel;
use crate::catalog::resources::ResourceCatalog;
use crate::catalog::roles::RoleCatalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_name, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillSense scoring service v{}", env!("CARGO_PKG_VERSION"));

    // Build the immutable reference tables once; they are shared read-only
    // across all requests.
    let roles = Arc::new(RoleCatalog::builtin());
    info!("Role catalog loaded ({} roles)", roles.len());

    let resources = Arc::new(ResourceCatalog::builtin());
    info!("Resource catalog loaded ({} skill keys)", resources.len());

    // Rule-based model by default; trained backends slot in here.
    let model = Arc::new(WeightedScoringModel);
    info!("Proficiency model initialized (weighted scoring)");

    let state = AppState {
        config: config.clone(),
        model,
        roles,
        resources,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS restricted to the configured origins; methods and headers stay open
/// for the dashboard clients.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
