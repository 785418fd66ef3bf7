//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request
//! handler through Axum's state extraction. It holds the collection store
//! behind an `Arc`, so clones are cheap and all handlers see the same data.

use std::sync::Arc;

use crate::server::data::store::JsonStore;

#[derive(Clone)]
pub struct AppState {
    /// Document store holding the three collections.
    pub store: Arc<JsonStore>,
}

impl AppState {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
