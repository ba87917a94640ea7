//! The resource client: request construction and the processing pipeline.
//!
//! # Design
//! `ResourceClient` owns the normalized base URL, the options, and the
//! transport, plus the most recently sent request and received response.
//! Each CRUD operation builds an `HttpRequest` and routes it through one
//! linear pipeline: authenticate, send, decode. Operations take `&mut self`
//! because they overwrite the last-seen state; the borrow checker thereby
//! enforces the single-threaded contract. Callers needing concurrency create
//! one client per thread.

use tracing::debug;
use url::form_urlencoded;

use crate::config::ClientOptions;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{HttpTransport, UreqTransport};
use crate::types::{Payload, RequestBody};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Synchronous client for a CRUD-style REST API rooted at a base URL.
pub struct ResourceClient {
    base_url: String,
    options: ClientOptions,
    transport: Box<dyn HttpTransport>,
    last_request: Option<HttpRequest>,
    last_response: Option<HttpResponse>,
}

impl ResourceClient {
    /// Create a client using the default `UreqTransport`.
    pub fn new(base_url: &str, options: ClientOptions) -> Self {
        Self::with_transport(base_url, options, Box::new(UreqTransport::new()))
    }

    /// Create a client with an explicitly injected transport.
    ///
    /// The base URL is normalized to end with `/` so concatenation with a
    /// relative path never drops the separator.
    pub fn with_transport(
        base_url: &str,
        options: ClientOptions,
        transport: Box<dyn HttpTransport>,
    ) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            options,
            transport,
            last_request: None,
            last_response: None,
        }
    }

    /// The normalized base URL, always ending with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` to `base_url + uri`. A JSON-value body is serialized to
    /// text first; a text body is written verbatim. An empty `uri` targets
    /// the base URL itself.
    pub fn create(
        &mut self,
        body: impl Into<RequestBody>,
        uri: &str,
        headers: &[(&str, &str)],
    ) -> Result<Payload, ClientError> {
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{}", self.base_url, uri),
            headers: owned_headers(headers),
            body: Some(body.into().into_text()?),
        };
        self.process(request)
    }

    /// GET `base_url + id`, with `query` URL-encoded into the query string.
    /// An empty query produces a URL with no `?` at all.
    pub fn get(
        &mut self,
        id: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Payload, ClientError> {
        let mut url = format!("{}{}", self.base_url, id);
        if !query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        let request = HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: owned_headers(headers),
            body: None,
        };
        self.process(request)
    }

    /// PUT `body` to `base_url + id`; body handling identical to `create`.
    pub fn update(
        &mut self,
        id: &str,
        body: impl Into<RequestBody>,
        headers: &[(&str, &str)],
    ) -> Result<Payload, ClientError> {
        let request = HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}{}", self.base_url, id),
            headers: owned_headers(headers),
            body: Some(body.into().into_text()?),
        };
        self.process(request)
    }

    /// DELETE `base_url + id` with an empty body.
    pub fn delete(&mut self, id: &str, headers: &[(&str, &str)]) -> Result<Payload, ClientError> {
        let request = HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}{}", self.base_url, id),
            headers: owned_headers(headers),
            body: None,
        };
        self.process(request)
    }

    /// POST a URL-encoded form to `base_url + uri`.
    ///
    /// When `headers` is empty the header set defaults to
    /// `content-type: application/x-www-form-urlencoded`. Any non-empty
    /// header set suppresses that default entirely; supplying the
    /// content-type is then the caller's responsibility.
    pub fn submit(
        &mut self,
        form_data: &[(&str, &str)],
        uri: &str,
        headers: &[(&str, &str)],
    ) -> Result<Payload, ClientError> {
        let headers = if headers.is_empty() {
            vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())]
        } else {
            owned_headers(headers)
        };
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form_data)
            .finish();
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{}", self.base_url, uri),
            headers,
            body: Some(body),
        };
        self.process(request)
    }

    /// Dispatch a request through the transport, recording it as
    /// `last_request` and the result as `last_response`.
    ///
    /// The single point of contact with the transport; no transformation is
    /// applied here. The request is recorded even when the transport fails,
    /// so the failed request stays inspectable.
    pub fn send(&mut self, request: HttpRequest) -> Result<&HttpResponse, ClientError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let result = self.transport.send(&request);
        self.last_request = Some(request);
        let response = result?;
        debug!(status = response.status, "recorded response");
        Ok(self.last_response.insert(response))
    }

    /// The linear processing pipeline: authenticate, send, decode.
    fn process(&mut self, request: HttpRequest) -> Result<Payload, ClientError> {
        let request = match &self.options.authentication_handler {
            Some(handler) => handler.transform(request),
            None => request,
        };

        let body = self.send(request)?.body.clone();

        if self.options.decode_json {
            serde_json::from_str(&body)
                .map(Payload::Json)
                .map_err(ClientError::Decode)
        } else {
            Ok(Payload::Raw(body))
        }
    }

    /// The most recently sent request. Fails with
    /// `ClientError::NoRequestSent` before the first send.
    pub fn last_request(&self) -> Result<&HttpRequest, ClientError> {
        self.last_request.as_ref().ok_or(ClientError::NoRequestSent)
    }

    /// The most recently received response. Fails with
    /// `ClientError::NoRequestSent` before the first completed send.
    pub fn last_response(&self) -> Result<&HttpResponse, ClientError> {
        self.last_response
            .as_ref()
            .ok_or(ClientError::NoRequestSent)
    }
}

fn owned_headers(headers: &[(&str, &str)]) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
