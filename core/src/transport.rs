//! Blocking executor for [`HttpRequest`] values, backed by ureq.
//!
//! # Design
//! Status codes are not interpreted here: the agent is configured with
//! `http_status_as_error(false)`, so 4xx/5xx responses come back as
//! ordinary [`HttpResponse`] values and only genuine transport failures
//! (DNS, connect, timeout) surface as `Err`. The optional timeout is a
//! straight pass-through to the agent configuration.

use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes requests built by `VscaleClient` over real HTTP.
#[derive(Debug, Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new() -> Self {
        Self::configured(None)
    }

    /// Transport with a global per-call timeout covering the whole
    /// round-trip.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::configured(Some(timeout))
    }

    fn configured(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Perform one round-trip and return the raw response.
    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut response = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&req.url), req).call()?,
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&req.url), req).call()?,
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&req.url), req).send(body.as_bytes())?
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&req.url), req).send_empty()?,
            (HttpMethod::Patch, Some(body)) => {
                with_headers(self.agent.patch(&req.url), req).send(body.as_bytes())?
            }
            (HttpMethod::Patch, None) => {
                with_headers(self.agent.patch(&req.url), req).send_empty()?
            }
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&req.url), req).send(body.as_bytes())?
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(&req.url), req).send_empty()?,
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy every header from the built request onto the ureq builder.
fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    req: &HttpRequest,
) -> ureq::RequestBuilder<B> {
    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }
    builder
}
