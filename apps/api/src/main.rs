mod adapters;
mod config;
mod dates;
mod enhance;
mod errors;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod store;
mod wizard;

use std::net::SocketAddr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhance::Enhance;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::DocumentStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Wizard API v{}", env!("CARGO_PKG_VERSION"));

    // Rehydrate the wizard document (missing or unreadable file = fresh start)
    let store = Arc::new(DocumentStore::open(&config.storage_path));
    info!("Document store ready at {}", config.storage_path.display());

    // Initialize the enhancement client when credentials are present.
    // Without them every other step still works; only /enhance errors.
    let enhancer: Option<Arc<dyn Enhance>> = match &config.gemini_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmClient::new(key.clone())))
        }
        None => {
            warn!("GEMINI_API_KEY not set, AI enhancement is disabled");
            None
        }
    };

    // Build app state
    let state = AppState {
        store,
        enhancer,
        enhance_in_flight: Arc::new(AtomicBool::new(false)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
