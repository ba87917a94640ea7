//! Synchronous REST resource client.
//!
//! # Overview
//! Builds HTTP requests against a configured base URL, optionally applies an
//! authentication transformation, sends the request through an injectable
//! transport, and optionally decodes JSON responses. Exposes CRUD-style
//! operations (create, get, update, delete) plus URL-encoded form submission.
//!
//! # Design
//! - `ResourceClient` owns the normalized base URL, options, transport, and
//!   the most recent request/response pair for introspection.
//! - The wire model (`HttpRequest` / `HttpResponse`) is plain data, so any
//!   conforming transport is injectable behind the `HttpTransport` trait;
//!   `UreqTransport` is the documented default.
//! - Every operation flows through one linear pipeline: authenticate, send,
//!   decode. Errors propagate to the caller; nothing is retried or logged
//!   away.
//!
//! # Example
//! ```no_run
//! use rest_core::{ClientOptions, ResourceClient};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), rest_core::ClientError> {
//! let mut client = ResourceClient::new("https://api.example.com/v1", ClientOptions::new());
//! let created = client.create(json!({"title": "Widget"}), "widgets", &[])?;
//! let id = created.as_json().and_then(|v| v["id"].as_str()).unwrap_or_default().to_string();
//! let fetched = client.get(&format!("widgets/{id}"), &[], &[])?;
//! # let _ = fetched;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ResourceClient;
pub use config::{AuthenticationHandler, ClientOptions};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, UreqTransport};
pub use types::{Payload, RequestBody};
