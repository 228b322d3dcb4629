//! Bookmark records and validated write payloads.

use crate::sanitize::escape_html;
use serde::{Deserialize, Serialize};

/// A stored bookmark row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: f64,
}

impl Bookmark {
    /// Copy with `title`, `url` and `description` HTML-escaped for output.
    /// `id` and `rating` pass through unchanged.
    pub fn sanitized(&self) -> Bookmark {
        Bookmark {
            id: self.id,
            title: escape_html(&self.title).into_owned(),
            url: escape_html(&self.url).into_owned(),
            description: self.description.as_deref().map(|d| escape_html(d).into_owned()),
            rating: self.rating,
        }
    }
}

/// Fields for an insert, already validated.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: f64,
}

/// Fields for a partial update. `None` leaves the stored column untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.description.is_none() && self.rating.is_none()
    }
}
