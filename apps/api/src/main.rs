mod config;
mod errors;
mod generation;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::writer::{LlmPostWriter, PostWriter, TemplatePostWriter};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=debug",
                env!("CARGO_PKG_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Blogwriter API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the writer: LLM-backed when a key is present, template-only otherwise
    let writer: Arc<dyn PostWriter> = match &config.anthropic_api_key {
        Some(api_key) => {
            let llm = LlmClient::new(
                api_key.clone(),
                config.llm_api_url.clone(),
                Duration::from_secs(config.llm_timeout_secs),
            )?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmPostWriter::new(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; serving template-generated posts only");
            Arc::new(TemplatePostWriter)
        }
    };

    let state = AppState {
        config: config.clone(),
        writer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
