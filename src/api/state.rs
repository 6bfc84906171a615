//! Application state for the API server

use crate::store::PointsStore;

/// API server state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: PointsStore,
}

impl AppState {
    pub fn new(store: PointsStore) -> Self {
        Self { store }
    }
}
