use std::sync::Arc;

use crate::aggregation::Aggregator;
use crate::config::Config;
use crate::translation::Translator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub translator: Arc<Translator>,
    /// Retained for handlers that need runtime settings later.
    #[allow(dead_code)]
    pub config: Config,
}
