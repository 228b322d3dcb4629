//! Request bodies and the checks applied before writes.

use crate::error::AppError;
use crate::model::{BookmarkPatch, NewBookmark};
use serde::Deserialize;
use serde_json::Value;

pub const MISSING_TITLE: &str = "Missing title in request body";
pub const MISSING_URL: &str = "Missing url in request body";
pub const MISSING_RATING: &str = "Missing rating in request body";
pub const RATING_RANGE: &str = "Rating needs to be a number between 1 and 5";
pub const EMPTY_PATCH: &str = "Request body must contain either 'title', 'url', 'description' or 'rating'";

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;

/// Rating as sent by clients: a JSON number, a numeric string, or anything
/// else, which is kept so the range check can reject it in order.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RatingInput {
    Number(f64),
    Text(String),
    Other(Value),
}

impl RatingInput {
    /// Zero, `false` and the empty string count as not supplied.
    fn is_supplied(&self) -> bool {
        match self {
            RatingInput::Number(n) => *n != 0.0,
            RatingInput::Text(s) => !s.is_empty(),
            RatingInput::Other(v) => !matches!(v, Value::Null | Value::Bool(false)),
        }
    }

    /// Parsed without truncation, so stored ratings keep their fractions.
    fn as_number(&self) -> Option<f64> {
        let n = match self {
            RatingInput::Number(n) => *n,
            RatingInput::Text(s) => s.trim().parse::<f64>().ok()?,
            RatingInput::Other(_) => return None,
        };
        n.is_finite().then_some(n)
    }
}

/// POST body. Unknown keys are ignored; text fields take any JSON value and
/// are checked by the validator so the check order holds for every input.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateBookmarkBody {
    pub title: Option<Value>,
    pub url: Option<Value>,
    pub description: Option<Value>,
    pub rating: Option<RatingInput>,
}

/// PATCH body. Unknown keys are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateBookmarkBody {
    pub title: Option<Value>,
    pub url: Option<Value>,
    pub description: Option<Value>,
    pub rating: Option<RatingInput>,
}

/// Whether PATCH re-checks the 1..=5 range that POST enforces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RatingPolicy {
    /// Any numeric rating is written as-is.
    #[default]
    Lenient,
    Strict,
}

/// A text field counts as supplied only when it is a non-empty string.
fn supplied(v: Option<Value>) -> Option<String> {
    match v {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn in_range(n: f64) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&n)
}

pub struct RequestValidator;

impl RequestValidator {
    /// Checks run in a fixed order (title, url, rating presence, rating range)
    /// and the first failure is the only one reported.
    pub fn validate_create(body: CreateBookmarkBody) -> Result<NewBookmark, AppError> {
        let Some(title) = supplied(body.title) else {
            tracing::error!("Title is required");
            return Err(AppError::Validation(MISSING_TITLE.into()));
        };
        let Some(url) = supplied(body.url) else {
            tracing::error!("URL is required");
            return Err(AppError::Validation(MISSING_URL.into()));
        };
        let Some(rating) = body.rating.filter(RatingInput::is_supplied) else {
            tracing::error!("Rating is required");
            return Err(AppError::Validation(MISSING_RATING.into()));
        };
        let parsed = match rating.as_number() {
            Some(n) if in_range(n) => n,
            _ => {
                tracing::error!(rating = ?rating, "invalid rating supplied");
                return Err(AppError::Validation(RATING_RANGE.into()));
            }
        };
        Ok(NewBookmark {
            title,
            url,
            description: supplied(body.description),
            rating: parsed,
        })
    }

    /// Collects the supplied fields. At least one must be present.
    pub fn validate_update(body: UpdateBookmarkBody, policy: RatingPolicy) -> Result<BookmarkPatch, AppError> {
        let rating = match body.rating.filter(RatingInput::is_supplied) {
            None => None,
            Some(r) => match r.as_number() {
                Some(n) if policy == RatingPolicy::Lenient || in_range(n) => Some(n),
                _ => {
                    tracing::error!(rating = ?r, "invalid rating supplied on update");
                    return Err(AppError::BadRequest(RATING_RANGE.into()));
                }
            },
        };
        let patch = BookmarkPatch {
            title: supplied(body.title),
            url: supplied(body.url),
            description: supplied(body.description),
            rating,
        };
        if patch.is_empty() {
            tracing::error!("update body had no recognised fields");
            return Err(AppError::BadRequest(EMPTY_PATCH.into()));
        }
        Ok(patch)
    }
}
