//! HTTP handlers for the bookmark resource.

pub mod bookmarks;
pub use bookmarks::*;
