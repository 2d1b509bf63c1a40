use std::sync::Arc;

use crate::config::Config;
use crate::extract::orchestrator::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The orchestrator: remote-first when a credential is configured,
    /// heuristic-only otherwise.
    pub parser: Arc<ResumeParser>,
    pub config: Config,
}
