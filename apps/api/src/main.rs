mod analysis;
mod config;
mod context;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::composer::Vera;
use crate::analysis::enhancer::{Enhancer, HeuristicEnhancer, LlmEnhancer};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting VERA API v{}", env!("CARGO_PKG_VERSION"));

    let vera = match config.rng_seed {
        Some(seed) => {
            info!("Random source seeded with {seed}");
            Vera::with_seed(seed)
        }
        None => Vera::new(),
    };

    // Enhancer: heuristic-only unless an Anthropic key is configured
    let enhancer: Arc<dyn Enhancer> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM enhancer enabled (model: {})", llm_client::MODEL);
            Arc::new(LlmEnhancer::new(llm))
        }
        None => {
            info!("No ANTHROPIC_API_KEY set, running heuristic analysis only");
            Arc::new(HeuristicEnhancer)
        }
    };

    let state = AppState {
        vera: Arc::new(vera),
        enhancer,
        config: config.clone(),
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
