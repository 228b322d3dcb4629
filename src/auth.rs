//! Bearer credential guard.

use crate::error::AppError;
use crate::extractors::BearerToken;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// The token clients must present.
#[derive(Clone, Debug)]
pub struct ApiToken(pub Arc<str>);

impl ApiToken {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        ApiToken(token.into())
    }
}

/// Reject requests whose bearer credential does not match the configured token.
pub async fn require_bearer(
    State(expected): State<ApiToken>,
    BearerToken(token): BearerToken,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match token {
        Some(t) if *t == *expected.0 => Ok(next.run(request).await),
        _ => {
            tracing::error!(path = %request.uri().path(), "unauthorized request");
            Err(AppError::Unauthorized)
        }
    }
}
