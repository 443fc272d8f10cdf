//! Shared application state for all routes.

use crate::store::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Constructed once at startup; the only path to persisted rows.
    pub store: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }
}
