//! Application state for dependency injection.

use std::sync::Arc;

use crate::clock::MonthClock;
use crate::store::NotificationStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NotificationStore>,
    pub clock: Arc<dyn MonthClock>,
}

impl AppState {
    /// Create new app state.
    pub fn new(store: Arc<dyn NotificationStore>, clock: Arc<dyn MonthClock>) -> Self {
        Self { store, clock }
    }
}
