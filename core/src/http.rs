//! HTTP request/response value types.
//!
//! # Design
//! These types describe HTTP traffic as plain data. The binding table in
//! [`crate::client`] produces `HttpRequest` values without touching the
//! network; [`crate::transport::Transport`] (or any caller-supplied
//! executor) performs the actual round-trip and hands back an
//! `HttpResponse`. Keeping the two sides decoupled makes every endpoint
//! binding checkable without a socket.
//!
//! All fields are owned (`String`, `Vec`) so values can be moved freely
//! between threads.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by the `VscaleClient::build_*` methods. `url` is absolute; `body`,
/// when present, is a JSON object already serialized to text.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// The binding layer performs no status interpretation and no body
/// decoding; status, headers, and body text are handed to the caller
/// exactly as received.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
