mod config;
mod errors;
mod layout;
mod letter;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::layout::PageGeometry;
use crate::letter::composer::GenerationSettings;
use crate::letter::gate::InFlightGate;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first: a missing API key stops startup here.
    let config = Config::from_env().map_err(AppError::from)?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cover Letter API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(&config).map_err(AppError::from)?;
    info!("LLM client initialized (base url: {})", config.openai_base_url);

    let settings = GenerationSettings::from(&config);
    let page_geometry = PageGeometry::default();
    info!(
        "Page geometry: {}x{}pt, {} columns, language: {}",
        page_geometry.width_pt,
        page_geometry.height_pt,
        page_geometry.wrap_columns,
        settings.default_language.as_deref().unwrap_or("from input")
    );

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        settings,
        page_geometry,
        gate: InFlightGate::new(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
