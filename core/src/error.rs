//! Error types for the resource client.
//!
//! # Design
//! Everything the client can fail with lands in one `ClientError` enum and
//! propagates to the caller unchanged. There is no retry or fallback layer;
//! a decode failure is always loud rather than silently yielding an empty
//! value.

use thiserror::Error;

/// Errors returned by `ResourceClient` operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying transport failed to complete the round-trip
    /// (DNS, connection refused, broken stream). The original error is
    /// carried unchanged.
    #[error("transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// A JSON request body could not be serialized to text.
    #[error("request body serialization failed: {0}")]
    Encode(serde_json::Error),

    /// The response body was not valid JSON while JSON decoding is enabled.
    #[error("response body is not valid JSON: {0}")]
    Decode(serde_json::Error),

    /// `last_request` or `last_response` was read before any send.
    #[error("no request has been sent yet")]
    NoRequestSent,
}
