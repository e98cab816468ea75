//! Thin binding layer for the vscale cloud-hosting REST API.
//!
//! # Overview
//! One `build_*` method per remote endpoint — scalets, tags, backups,
//! SSH keys, billing, domains and DNS records — each mapping its
//! arguments onto a method, URL, header set, and JSON body as an
//! [`HttpRequest`] value, without touching the network. [`Transport`]
//! executes a request over HTTP and returns the raw [`HttpResponse`];
//! callers inspect the status code and parse the body themselves.
//!
//! # Design
//! - [`VscaleClient`] holds only the token and base URL; every call is
//!   independent and the client can be cloned freely across threads.
//! - No retries, no pagination, no response models: the layer is a flat
//!   enumeration of endpoint bindings over one shared request helper.
//! - Transport failures surface as [`ApiError::Transport`]; non-2xx
//!   responses are data, not errors.
//!
//! ```no_run
//! use vscale_core::{Transport, VscaleClient};
//!
//! # fn main() -> Result<(), vscale_core::ApiError> {
//! let client = VscaleClient::new("your-api-token");
//! let transport = Transport::new();
//! let response = transport.execute(&client.build_list_servers())?;
//! assert_eq!(response.status, 200);
//! println!("{}", response.body);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{VscaleClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{ServerCreate, TagPayload};
