//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::storage::JsonStore;

/// Shared application state.
///
/// The store is already internally shared; the data directory is kept so
/// the reload endpoint can re-read it.
#[derive(Clone)]
pub struct AppState {
    /// Schedule and station data.
    pub store: JsonStore,

    /// Directory the store was loaded from.
    pub data_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: JsonStore, data_dir: PathBuf) -> Self {
        Self {
            store,
            data_dir: Arc::new(data_dir),
        }
    }
}
