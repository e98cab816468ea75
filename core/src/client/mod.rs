//! Endpoint binding table for the vscale REST API.
//!
//! # Design
//! `VscaleClient` holds the caller's API token and a base URL, nothing
//! else. Each remote endpoint gets exactly one `build_*` method that maps
//! its arguments onto a method, URL, header set, and JSON body, returning
//! an [`HttpRequest`] without performing any I/O. The caller executes the
//! request (see [`crate::transport::Transport`]) and inspects the raw
//! response itself — no retries, no status interpretation, no response
//! models live in this layer.
//!
//! Binding rules shared by every operation:
//! - `X-Token: <token>` is attached to every request.
//! - `Content-Type: application/json;charset=UTF-8` is attached exactly
//!   when a body is present; bodyless requests carry no content-type.
//! - Resource identifiers interpolate into the path verbatim.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

mod account;
mod backups;
mod billing;
mod catalog;
mod domains;
mod servers;
mod sshkeys;
mod tags;

/// Default API host. All endpoints live under `/v1` on this host.
pub const DEFAULT_BASE_URL: &str = "https://api.vscale.io";

/// Stateless binding table for the vscale API.
///
/// Cheap to clone and safe to share across threads; no state accumulates
/// between calls beyond the token given at construction.
#[derive(Debug, Clone)]
pub struct VscaleClient {
    base_url: String,
    token: String,
}

impl VscaleClient {
    /// Client for the production host.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Client for an alternate host (tests point this at a mock server).
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Bodyless request: token header only.
    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: vec![("X-Token".to_string(), self.token.clone())],
            body: None,
        }
    }

    /// Request with a JSON-encoded payload and the matching content-type.
    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: vec![
                ("X-Token".to_string(), self.token.clone()),
                (
                    "Content-Type".to_string(),
                    "application/json;charset=UTF-8".to_string(),
                ),
            ],
            body: Some(body),
        })
    }
}
