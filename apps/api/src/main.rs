mod aggregation;
mod classify;
mod config;
mod errors;
mod models;
mod routes;
mod sources;
mod state;
mod text;
mod translation;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::aggregation::Aggregator;
use crate::config::{Config, TranslationEngine};
use crate::routes::build_router;
use crate::sources::arbeitnow::ArbeitnowSource;
use crate::sources::catalog::CatalogSource;
use crate::sources::remotive::RemotiveSource;
use crate::sources::JobSource;
use crate::state::AppState;
use crate::translation::providers::{GoogleTranslate, LibreTranslate, TranslationProvider};
use crate::translation::Translator;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
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

    info!("Starting NexJob aggregation API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the translation pipeline (provider order from config)
    let translator = Arc::new(build_translator(&config));
    info!(
        "Translator initialized (primary engine: {:?})",
        config.translation_engine
    );

    // Register job sources. The curated catalog goes last so live records
    // win id-based dedup.
    let sources: Vec<Arc<dyn JobSource>> = vec![
        Arc::new(ArbeitnowSource::new(Arc::clone(&translator))),
        Arc::new(RemotiveSource::new(Arc::clone(&translator))),
        Arc::new(CatalogSource),
    ];
    let aggregator = Arc::new(Aggregator::new(sources));
    info!("Job aggregator initialized ({} sources)", aggregator.source_count());

    // Build app state
    let state = AppState {
        aggregator,
        translator,
        config: config.clone(),
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

/// Orders the translation providers according to configuration; the
/// non-primary engine serves as the fallback.
fn build_translator(config: &Config) -> Translator {
    let google: Arc<dyn TranslationProvider> = Arc::new(GoogleTranslate::new());
    let libre: Arc<dyn TranslationProvider> = Arc::new(LibreTranslate::new(&config.libretranslate_url));

    let providers = match config.translation_engine {
        TranslationEngine::Google => vec![google, libre],
        TranslationEngine::Libre => vec![libre, google],
    };

    Translator::new(providers)
}
