//! HTTP execution abstraction.
//!
//! [`RestClient`](crate::RestClient) builds requests; an [`HttpExecutor`]
//! performs the exchange. The trait is the seam where tests substitute a
//! mock for the network.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Error;
use crate::types::{HttpRequest, HttpResponse};

/// Request timeout used by the shared default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for executing HTTP requests.
///
/// Implementations must be shareable across threads: a single executor is
/// held behind an `Arc` by every client derived from the same root.
pub trait HttpExecutor: Send + Sync {
    /// Execute an HTTP request and return the response with its full body.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error>;
}

/// Production HTTP executor using reqwest's blocking client.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    /// Create a new executor with the given timeout.
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }

    /// Create with default timeout of 30 seconds.
    pub fn with_default_timeout() -> Result<Self, Error> {
        Self::new(DEFAULT_TIMEOUT)
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpExecutor for ReqwestExecutor {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let method: http::Method = request.method.clone().into();

        let mut req_builder = self
            .client
            .request(method, request.url.clone())
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_vec());
        }

        let response = req_builder.send()?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();
        let headers = response.headers().clone();
        let body = response.bytes()?;

        Ok(HttpResponse {
            status,
            status_text,
            headers,
            body,
        })
    }
}

/// Mock HTTP executor for testing.
///
/// Returns predefined responses based on request matching.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use http::header::{HeaderValue, CONTENT_TYPE};

    /// A mock HTTP executor that returns predefined responses.
    #[derive(Clone, Default)]
    pub struct MockExecutor {
        /// Responses keyed by URL path.
        responses: Arc<Mutex<HashMap<String, HttpResponse>>>,
        /// Default response when no match found.
        default_response: Arc<Mutex<Option<HttpResponse>>>,
        /// Recorded requests for verification.
        recorded_requests: Arc<Mutex<Vec<HttpRequest>>>,
        /// When set, every request fails with this transport error.
        failure: Arc<Mutex<Option<String>>>,
    }

    impl MockExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a response for a specific URL path.
        pub fn with_response(self, path: impl Into<String>, response: HttpResponse) -> Self {
            self.responses.lock().unwrap().insert(path.into(), response);
            self
        }

        /// Set a default response when no path matches.
        pub fn with_default_response(self, response: HttpResponse) -> Self {
            *self.default_response.lock().unwrap() = Some(response);
            self
        }

        /// Configure to fail all requests with a transport error.
        pub fn fail_with(self, message: impl Into<String>) -> Self {
            *self.failure.lock().unwrap() = Some(message.into());
            self
        }

        /// Get all recorded requests.
        pub fn recorded_requests(&self) -> Vec<HttpRequest> {
            self.recorded_requests.lock().unwrap().clone()
        }

        /// The most recent request, if any.
        pub fn last_request(&self) -> Option<HttpRequest> {
            self.recorded_requests.lock().unwrap().last().cloned()
        }

        /// A 200 response declaring the given content type.
        pub fn typed_response(content_type: &'static str, body: &'static str) -> HttpResponse {
            HttpResponse::new(200)
                .with_header(CONTENT_TYPE, HeaderValue::from_static(content_type))
                .with_body(body)
        }

        /// A 200 `application/json` response.
        pub fn json_response(body: &'static str) -> HttpResponse {
            Self::typed_response("application/json", body)
        }

        /// Create a 404 Not Found response.
        pub fn not_found() -> HttpResponse {
            HttpResponse::new(404)
        }
    }

    impl HttpExecutor for MockExecutor {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
            self.recorded_requests.lock().unwrap().push(request.clone());

            if let Some(message) = self.failure.lock().unwrap().clone() {
                return Err(Error::Transport(message.into()));
            }

            let responses = self.responses.lock().unwrap();
            if let Some(response) = responses.get(request.url.path()) {
                return Ok(response.clone());
            }

            if let Some(ref response) = *self.default_response.lock().unwrap() {
                return Ok(response.clone());
            }

            Ok(Self::not_found())
        }
    }
}
