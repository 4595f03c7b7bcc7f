//! The immutable request builder and executor.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use cookie::Cookie;
use fluent_rest_media::{DecodeError, DecodeTarget, MediaType};
use http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, COOKIE};
use url::Url;

use crate::error::Error;
use crate::executor::{HttpExecutor, ReqwestExecutor, DEFAULT_TIMEOUT};
use crate::types::{HttpRequest, HttpResponse, Method};

lazy_static::lazy_static! {
    static ref DEFAULT_EXECUTOR: Arc<dyn HttpExecutor> = {
        let executor = ReqwestExecutor::new(DEFAULT_TIMEOUT)
            .unwrap_or_else(|_| ReqwestExecutor::with_client(reqwest::blocking::Client::new()));
        Arc::new(executor)
    };
}

/// An immutable snapshot of everything needed to issue a REST request.
///
/// Every builder method takes `&self` and returns a new client; the receiver
/// is never modified, so a partially configured client can be stored and
/// specialised many times over:
///
/// ```ignore
/// use fluent_rest_client::{MediaType, RestClient};
///
/// let api = RestClient::new("https://api.github.com/").accept(MediaType::Json);
///
/// let mut events: Vec<serde_json::Value> = Vec::new();
/// api.path(["users", "octocat", "events"]).get(&mut [&mut events])?;
/// ```
///
/// All clients derived from one root share the same transport. Clients
/// created with [`RestClient::new`] share a process-wide reqwest executor.
#[derive(Clone)]
pub struct RestClient {
    executor: Arc<dyn HttpExecutor>,
    url: String,
    accept: MediaType,
    content_type: MediaType,
    headers: HashMap<String, String>,
    query: HashMap<String, String>,
    cookies: Vec<Cookie<'static>>,
}

impl RestClient {
    /// Create a client rooted at `base_url`.
    ///
    /// Surrounding slashes are trimmed. The URL is only validated when a
    /// request is sent. Accept and Content-Type both default to JSON.
    pub fn new(base_url: &str) -> Self {
        Self::with_executor(base_url, DEFAULT_EXECUTOR.clone())
    }

    /// Create a client rooted at `base_url` that sends through `executor`.
    pub fn with_executor(base_url: &str, executor: Arc<dyn HttpExecutor>) -> Self {
        Self {
            executor,
            url: base_url.trim_matches('/').to_string(),
            accept: MediaType::Json,
            content_type: MediaType::Json,
            headers: HashMap::new(),
            query: HashMap::new(),
            cookies: Vec::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The accumulated URL without the query string.
    pub fn base_url(&self) -> &str {
        &self.url
    }

    /// The accumulated URL with the query parameters encoded onto it.
    ///
    /// Parameter order is unspecified. The query lands where
    /// [`build_request`](Self::build_request) puts it, ahead of any fragment.
    pub fn get_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }

        if let Ok(mut url) = Url::parse(&self.url) {
            self.encode_query(&mut url);
            return url.into();
        }

        // Unparseable base: splice the query in textually.
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query)
            .finish();
        let (base, fragment) = match self.url.find('#') {
            Some(at) => self.url.split_at(at),
            None => (self.url.as_str(), ""),
        };
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{base}{separator}{query}{fragment}")
    }

    pub fn get_accept(&self) -> MediaType {
        self.accept
    }

    pub fn get_content_type(&self) -> MediaType {
        self.content_type
    }

    pub fn get_headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn get_query(&self) -> &HashMap<String, String> {
        &self.query
    }

    pub fn get_cookies(&self) -> &[Cookie<'static>] {
        &self.cookies
    }

    // ========================================================================
    // Immutable builder methods
    // ========================================================================

    /// The media type expected back, and used to decode response bodies.
    pub fn accept(&self, accept: MediaType) -> Self {
        let mut next = self.clone();
        next.accept = accept;
        next
    }

    /// The media type declared for the request body.
    pub fn content_type(&self, content_type: MediaType) -> Self {
        let mut next = self.clone();
        next.content_type = content_type;
        next
    }

    /// Append path segments, each trimmed of its own surrounding slashes.
    ///
    /// `path(["1", "/2", "/3/"])` on `http://x` yields `http://x/1/2/3`.
    pub fn path<I>(&self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut next = self.clone();
        for segment in segments {
            next.url.push('/');
            next.url.push_str(segment.as_ref().trim_matches('/'));
        }
        next
    }

    /// Set a query parameter, replacing any earlier value for `key`.
    pub fn query(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.query.insert(key.into(), value.into());
        next
    }

    /// Set a request header, replacing any earlier value for `key`.
    ///
    /// Names are case-insensitive and stored lowercased, so `X-Token` and
    /// `x-token` are the same header. Custom headers are applied after
    /// `Accept` and `Content-Type`, so they win on collision.
    pub fn header(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.headers.insert(key.into().to_ascii_lowercase(), value.into());
        next
    }

    /// Append a cookie to be sent with the request.
    pub fn cookie(&self, cookie: Cookie<'static>) -> Self {
        let mut next = self.clone();
        next.cookies.push(cookie);
        next
    }

    // ========================================================================
    // Terminal operations
    // ========================================================================

    pub fn get(&self, targets: &mut [&mut dyn DecodeTarget]) -> Result<HttpResponse, Error> {
        self.send(Method::GET, None, targets)
    }

    pub fn put(
        &self,
        body: impl Into<Bytes>,
        targets: &mut [&mut dyn DecodeTarget],
    ) -> Result<HttpResponse, Error> {
        self.send(Method::PUT, Some(body.into()), targets)
    }

    pub fn post(
        &self,
        body: impl Into<Bytes>,
        targets: &mut [&mut dyn DecodeTarget],
    ) -> Result<HttpResponse, Error> {
        self.send(Method::POST, Some(body.into()), targets)
    }

    pub fn delete(&self, targets: &mut [&mut dyn DecodeTarget]) -> Result<HttpResponse, Error> {
        self.send(Method::DELETE, None, targets)
    }

    /// Build and execute a request, then decode the response into `targets`.
    ///
    /// With no targets the response is returned as-is. Otherwise its
    /// `Content-Type` must contain the accept type, and the body is decoded
    /// into every target; the call succeeds if at least one decode does.
    ///
    /// Executors buffer the whole body before returning, so a body that fails
    /// to arrive is a transport error even when no targets are given.
    pub fn send(
        &self,
        method: Method,
        body: Option<Bytes>,
        targets: &mut [&mut dyn DecodeTarget],
    ) -> Result<HttpResponse, Error> {
        let request = self.build_request(method, body)?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            targets = targets.len(),
            "sending request"
        );

        let response = self.executor.execute(&request)?;

        tracing::debug!(
            status = response.status,
            content_type = response.content_type().unwrap_or_default(),
            "received response"
        );

        if targets.is_empty() {
            return Ok(response);
        }

        let content_type = response.content_type().unwrap_or_default();
        if !self.accept.matches(content_type) {
            return Err(Error::ContentTypeMismatch {
                expected: self.accept.to_string(),
                actual: content_type.to_string(),
            });
        }

        decode_into_targets(self.accept, &response.body, targets)?;
        Ok(response)
    }

    /// Build the outbound request without sending it.
    pub fn build_request(&self, method: Method, body: Option<Bytes>) -> Result<HttpRequest, Error> {
        let mut url = Url::parse(&self.url).map_err(|source| Error::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;

        self.encode_query(&mut url);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(self.accept.as_str()));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type.as_str()));

        for (name, value) in &self.headers {
            headers.insert(
                HeaderName::try_from(name.as_str())?,
                HeaderValue::try_from(value.as_str())?,
            );
        }

        if !self.cookies.is_empty() {
            let cookies = self
                .cookies
                .iter()
                .map(|c| format!("{}={}", c.name(), c.value()))
                .collect::<Vec<_>>()
                .join("; ");
            headers.insert(COOKIE, HeaderValue::try_from(cookies)?);
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    fn encode_query(&self, url: &mut Url) {
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("url", &self.url)
            .field("accept", &self.accept)
            .field("content_type", &self.content_type)
            .field("headers", &self.headers)
            .field("query", &self.query)
            .field("cookies", &self.cookies)
            .finish_non_exhaustive()
    }
}

/// Decode `body` into every target, never stopping early.
///
/// Fails only if every target failed, carrying each target's error.
fn decode_into_targets(
    media_type: MediaType,
    body: &[u8],
    targets: &mut [&mut dyn DecodeTarget],
) -> Result<(), Error> {
    let errors: Vec<DecodeError> = targets
        .iter_mut()
        .filter_map(|target| target.decode_from(media_type, body).err())
        .collect();

    tracing::debug!(
        targets = targets.len(),
        decoded = targets.len() - errors.len(),
        "decoded response body"
    );

    if !targets.is_empty() && errors.len() == targets.len() {
        return Err(Error::AllTargetsFailed(errors));
    }
    Ok(())
}
