//! fluent-rest: a fluent, immutable REST client with content negotiation.
//!
//! Build a [`RestClient`] once, derive as many specialised clients from it as
//! needed, and decode responses straight into your own types according to the
//! negotiated [`MediaType`].
//!
//! See `examples/github_events.rs` for a complete program.

pub use fluent_rest_client::{
    Cookie, Error, HttpExecutor, HttpRequest, HttpResponse, Method, ReqwestExecutor, RestClient,
    DEFAULT_TIMEOUT,
};
pub use fluent_rest_media::{DecodeError, DecodeTarget, MediaType, UnknownMediaType};

/// Layered crates, for callers that only need one of them.
pub mod media {
    pub use fluent_rest_media::*;
}

pub mod client {
    pub use fluent_rest_client::*;
}
