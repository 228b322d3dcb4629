//! Shared application state for all routes.

use crate::service::{BookmarkStore, RatingPolicy};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected persistence gateway; its lifecycle is owned by the caller.
    pub store: Arc<dyn BookmarkStore>,
    pub rating_policy: RatingPolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        AppState {
            store,
            rating_policy: RatingPolicy::default(),
        }
    }

    pub fn with_rating_policy(mut self, policy: RatingPolicy) -> Self {
        self.rating_policy = policy;
        self
    }
}
