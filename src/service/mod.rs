//! Persistence gateway and request validation.

mod crud;
mod validation;
pub use crud::{BookmarkStore, PgBookmarkStore};
pub use validation::*;
