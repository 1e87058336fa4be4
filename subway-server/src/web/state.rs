//! Application state for the web layer.

use std::sync::Arc;

use crate::directory::Directory;
use crate::network::PathConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station and line records
    pub directory: Directory,

    /// Path search configuration
    pub config: Arc<PathConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: Directory, config: PathConfig) -> Self {
        Self {
            directory,
            config: Arc::new(config),
        }
    }
}
