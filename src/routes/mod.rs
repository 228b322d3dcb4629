//! Router assembly.

pub mod bookmarks;
pub mod common;

pub use bookmarks::{bookmark_routes, Operation, MOUNT_POINTS};
pub use common::common_routes;

use crate::auth::{require_bearer, ApiToken};
use crate::config::Settings;
use crate::state::AppState;
use axum::{middleware, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: the bookmark table under every mount point, guarded by
/// the bearer check when a token is configured, plus the unguarded probes.
pub fn app(state: AppState, settings: &Settings) -> Router {
    let state = state.with_rating_policy(settings.rating_policy);
    let mut api = Router::new();
    for mount in MOUNT_POINTS {
        let routes = bookmark_routes(state.clone());
        api = if mount.is_empty() {
            api.merge(routes)
        } else {
            api.nest(mount, routes)
        };
    }
    if let Some(token) = &settings.api_token {
        api = api.layer(middleware::from_fn_with_state(
            ApiToken::new(token.as_str()),
            require_bearer,
        ));
    }
    Router::new()
        .merge(common_routes(state))
        .merge(api)
        .layer(RequestBodyLimitLayer::new(settings.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
