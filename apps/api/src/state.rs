use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// The parser is stateless, so this only carries configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
