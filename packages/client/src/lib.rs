//! # fluent-rest-client
//!
//! An immutable, fluent REST client.
//!
//! A [`RestClient`] is a snapshot of request state: base URL, path, query
//! parameters, headers, cookies and the negotiated media types. Every
//! builder call returns a new snapshot, so partially built clients can be
//! stored and reused freely:
//!
//! ```ignore
//! use fluent_rest_client::{MediaType, RestClient};
//!
//! let github = RestClient::new("https://api.github.com/")
//!     .accept(MediaType::Json)
//!     .header("User-Agent", "fluent-rest");
//!
//! let mut events: Vec<Event> = Vec::new();
//! github.path(["users", "octocat", "events"]).get(&mut [&mut events])?;
//! ```
//!
//! ## Decoding into several shapes
//!
//! Terminal operations take any number of decode targets. The body is
//! decoded into each of them with the accept type, and the call succeeds as
//! long as one decode does. Pass an object shape and an array shape when an
//! endpoint may return either:
//!
//! ```ignore
//! let mut one = Event::default();
//! let mut many: Vec<Event> = Vec::new();
//! client.get(&mut [&mut one, &mut many])?;
//! ```
//!
//! If every target fails, [`Error::AllTargetsFailed`] carries one
//! [`DecodeError`] per target. If the response `Content-Type` does not
//! contain the accept type, [`Error::ContentTypeMismatch`] is returned
//! before anything is decoded.
//!
//! ## Transport
//!
//! Requests are executed by an [`HttpExecutor`]. [`RestClient::new`] uses a
//! process-wide [`ReqwestExecutor`] with a 30 second timeout;
//! [`RestClient::with_executor`] accepts any other implementation.

pub mod client;
pub mod error;
pub mod executor;
pub mod types;

pub use client::RestClient;
pub use error::Error;
pub use executor::{HttpExecutor, ReqwestExecutor, DEFAULT_TIMEOUT};
pub use types::{HttpRequest, HttpResponse, Method};

pub use cookie::Cookie;
pub use fluent_rest_media::{DecodeError, DecodeTarget, MediaType};
