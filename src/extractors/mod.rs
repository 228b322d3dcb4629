//! Request extractors.

pub mod bearer;
pub mod body;

pub use bearer::BearerToken;
pub use body::{decode_json, JsonBody};
