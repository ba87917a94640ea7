//! Client configuration and the authentication extension point.
//!
//! # Design
//! Options are a plain struct merged over defaults at construction time:
//! no authentication handler, JSON decoding enabled. Authentication schemes
//! themselves are out of scope; the client only exposes the seam, a
//! single-method trait that rewrites a request before it is sent. Plain
//! closures implement the trait through a blanket impl.

use std::fmt;

use crate::http::HttpRequest;

/// Request-transforming hook applied once per operation before sending,
/// typically to attach an `Authorization` header or a signature.
pub trait AuthenticationHandler {
    fn transform(&self, request: HttpRequest) -> HttpRequest;
}

impl<F> AuthenticationHandler for F
where
    F: Fn(HttpRequest) -> HttpRequest,
{
    fn transform(&self, request: HttpRequest) -> HttpRequest {
        self(request)
    }
}

/// Construction-time options for `ResourceClient`.
pub struct ClientOptions {
    /// Optional request transform applied before every send. Default: none.
    pub authentication_handler: Option<Box<dyn AuthenticationHandler>>,
    /// Whether response bodies are parsed as JSON. Default: true.
    pub decode_json: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            authentication_handler: None,
            decode_json: true,
        }
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable JSON decoding of response bodies.
    pub fn decode_json(mut self, decode: bool) -> Self {
        self.decode_json = decode;
        self
    }

    /// Install an authentication handler.
    pub fn authentication_handler(
        mut self,
        handler: impl AuthenticationHandler + 'static,
    ) -> Self {
        self.authentication_handler = Some(Box::new(handler));
        self
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field(
                "authentication_handler",
                &self.authentication_handler.is_some(),
            )
            .field("decode_json", &self.decode_json)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::http::HttpMethod;

    use super::*;

    #[test]
    fn defaults_are_no_handler_and_decode_enabled() {
        let options = ClientOptions::default();
        assert!(options.authentication_handler.is_none());
        assert!(options.decode_json);
    }

    #[test]
    fn setters_merge_over_defaults() {
        let options = ClientOptions::new().decode_json(false);
        assert!(!options.decode_json);
        assert!(options.authentication_handler.is_none());
    }

    #[test]
    fn closure_acts_as_authentication_handler() {
        let options = ClientOptions::new().authentication_handler(|mut request: HttpRequest| {
            request
                .headers
                .push(("authorization".to_string(), "Bearer token".to_string()));
            request
        });

        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://api.test/".to_string(),
            headers: Vec::new(),
            body: None,
        };
        let handler = options.authentication_handler.as_ref().unwrap();
        let transformed = handler.transform(request);
        assert_eq!(transformed.header("authorization"), Some("Bearer token"));
    }
}
