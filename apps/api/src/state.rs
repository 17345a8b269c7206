use std::sync::Arc;

use crate::analysis::composer::Vera;
use crate::analysis::enhancer::Enhancer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The pipeline engine. Owns the process-wide brand context.
    pub vera: Arc<Vera>,
    /// Pluggable enhancer. Default: HeuristicEnhancer. LlmEnhancer when an
    /// Anthropic key is configured.
    pub enhancer: Arc<dyn Enhancer>,
    pub config: Config,
}
