//! Application state

use std::sync::Arc;

use crate::config::Config;
use crate::document::render_document;

/// Shared application state
///
/// The page shell always starts from the same state, so the document is
/// rendered once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub document: Arc<String>,
}

impl AppState {
    /// Create new application state, prerendering the document
    pub fn new(config: Config) -> Self {
        let document = Arc::new(render_document(&config));

        Self {
            config: Arc::new(config),
            document,
        }
    }
}
