//! API server state

use std::sync::Arc;

use crate::store::PeakStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Peak store, injected at construction
    pub store: Arc<dyn PeakStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PeakStore>) -> Self {
        Self { store }
    }
}
