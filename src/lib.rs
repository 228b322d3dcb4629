//! Bookmarks API: CRUD over a single `bookmarks` table, with input validation
//! before writes and HTML escaping of text fields on the way out.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod sanitize;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{Bookmark, BookmarkPatch, NewBookmark};
pub use routes::{app, bookmark_routes, common_routes, Operation, MOUNT_POINTS};
pub use service::{BookmarkStore, PgBookmarkStore, RatingPolicy};
pub use state::AppState;
pub use store::{ensure_bookmarks_table, ensure_database_exists, truncate_bookmarks};
