//! Lenient JSON body extractor.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON request body. An empty body decodes as `T::default()` and the content
/// type is not enforced, so a body-less PATCH still reaches the id lookup.
/// Malformed JSON is a structured 400; an oversized body keeps its 413.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        decode_json(&bytes).map(JsonBody).map_err(IntoResponse::into_response)
    }
}

/// Decode a buffered body with the same rules as [`JsonBody`].
pub fn decode_json<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::error!(error = %e, "malformed JSON body");
        AppError::BadRequest(format!("Invalid JSON body: {}", e))
    })
}
