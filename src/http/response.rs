//! Response rendering.
//!
//! # Responsibilities
//! - Render handler payloads as pretty-printed JSON
//! - Swallow encoding failures instead of surfacing them to the client
//!
//! # Design Decisions
//! - Two-space indentation and a trailing newline, matching what callers'
//!   test fixtures expect byte-for-byte
//! - A failed encode degrades to an empty 200; reflection endpoints never
//!   turn their own serialization into a client-visible error

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Render `payload` as indented JSON with a trailing newline.
pub fn json_pretty<T: Serialize>(payload: &T) -> Response {
    match serde_json::to_string_pretty(payload) {
        Ok(mut body) => {
            body.push('\n');
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
        Err(error) => {
            tracing::debug!(error = %error, "response body encoding failed");
            StatusCode::OK.into_response()
        }
    }
}
