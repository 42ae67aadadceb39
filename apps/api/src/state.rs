use std::sync::Arc;

use crate::config::Config;
use crate::generation::writer::PostWriter;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable post writer. Default: `LlmPostWriter`, which falls back to the template
    /// generator on its own when the provider is unavailable.
    pub writer: Arc<dyn PostWriter>,
}
