//! Transport abstraction and the default blocking implementation.
//!
//! # Design
//! `HttpTransport` is the single point where the client touches the network:
//! one synchronous send operation over the plain-data wire model. Anything
//! that satisfies it is injectable, so tests swap in canned or recording
//! transports without touching the client. `UreqTransport` is the documented
//! default; there is no runtime discovery of a transport.

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Synchronous HTTP transport collaborator.
///
/// Implementations execute the request and return the response as data,
/// failing with `ClientError::Transport` only on connection-level problems.
/// Non-2xx statuses are not errors at this layer; the client applies no
/// status interpretation.
pub trait HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError>;
}

/// Default blocking transport over a `ureq` agent.
///
/// Status-as-error handling is disabled so 4xx/5xx responses come back as
/// plain `HttpResponse` data. Timeouts, pooling, and TLS configuration are
/// the agent's concern; construct with a custom agent to tune them.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap an existing agent. The agent must have status-as-error disabled
    /// for non-2xx responses to reach the client as data.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let result = match request.method {
            HttpMethod::Get | HttpMethod::Delete => {
                let mut builder = match request.method {
                    HttpMethod::Get => self.agent.get(&request.url),
                    _ => self.agent.delete(&request.url),
                };
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post | HttpMethod::Put => {
                let mut builder = match request.method {
                    HttpMethod::Post => self.agent.post(&request.url),
                    _ => self.agent.put(&request.url),
                };
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ClientError::Transport(Box::new(e)))?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ClientError::Transport(Box::new(e)))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
