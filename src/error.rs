//! Error types shared across the crate.

use thiserror::Error;

/// Failure raised by [`api_request`](crate::api::api_request) and its
/// wrappers.
///
/// `to_string()` yields the text a page would show the user: the
/// server-provided message for status failures, the underlying cause
/// otherwise.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered outside the 200-299 range. `message` carries the
    /// body's `message` field when it is a non-empty string, otherwise
    /// `HTTP <status>: <status text>`.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Network(#[from] TransportError),
    /// The response body (or an outgoing body) was not valid JSON.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Transport-level failure reported by an [`HttpTransport`](crate::traits::HttpTransport).
#[derive(Clone, Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Failure reported by a [`KeyValueStore`](crate::traits::KeyValueStore) backend.
#[derive(Clone, Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);
