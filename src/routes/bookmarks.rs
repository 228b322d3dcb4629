//! Bookmark routes as a static table of (operation, method, path) entries.

use crate::handlers::bookmarks::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{
    http::Method,
    routing::{on, MethodFilter, MethodRouter},
    Router,
};

pub const COLLECTION_PATH: &str = "/bookmarks";
pub const ITEM_PATH: &str = "/bookmarks/:id";

/// Prefixes the bookmark table is served under; both behave identically.
pub const MOUNT_POINTS: &[&str] = &["", "/api"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn method(self) -> Method {
        match self {
            Operation::List | Operation::Read => Method::GET,
            Operation::Create => Method::POST,
            Operation::Update => Method::PATCH,
            Operation::Delete => Method::DELETE,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Operation::List | Operation::Create => COLLECTION_PATH,
            Operation::Read | Operation::Update | Operation::Delete => ITEM_PATH,
        }
    }

    fn method_filter(self) -> MethodFilter {
        match self {
            Operation::List | Operation::Read => MethodFilter::GET,
            Operation::Create => MethodFilter::POST,
            Operation::Update => MethodFilter::PATCH,
            Operation::Delete => MethodFilter::DELETE,
        }
    }

    fn handler(self) -> MethodRouter<AppState> {
        let filter = self.method_filter();
        match self {
            Operation::List => on(filter, list),
            Operation::Create => on(filter, create),
            Operation::Read => on(filter, read),
            Operation::Update => on(filter, update),
            Operation::Delete => on(filter, delete),
        }
    }
}

/// Router for every entry in [`Operation::ALL`], grouped by path.
pub fn bookmark_routes(state: AppState) -> Router {
    let mut router = Router::new();
    for path in [COLLECTION_PATH, ITEM_PATH] {
        let methods = Operation::ALL
            .into_iter()
            .filter(|op| op.path() == path)
            .inspect(|op| tracing::debug!(operation = ?op, method = %op.method(), path, "route registered"))
            .map(Operation::handler)
            .reduce(MethodRouter::merge);
        if let Some(methods) = methods {
            router = router.route(path, methods);
        }
    }
    router.with_state(state)
}
