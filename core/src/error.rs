//! Error types for the vscale API client.
//!
//! # Design
//! The binding layer never interprets status codes — a 4xx or 5xx response
//! is data, not an error. Only two things can fail on the client side:
//! serializing a request payload, and the transport round-trip itself
//! (DNS, connect, timeout). Both carry the underlying message verbatim.

use std::fmt;

/// Errors returned by `VscaleClient` builders and `Transport::execute`.
#[derive(Debug)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The HTTP round-trip failed before a response was received.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ureq::Error> for ApiError {
    fn from(e: ureq::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
