//! # fluent-rest-media
//!
//! The closed set of media types understood by fluent-rest, and the rules for
//! decoding a response body of each type into a caller-supplied entity.
//!
//! ```rust
//! use fluent_rest_media::MediaType;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Greeting {
//!     name: String,
//! }
//!
//! let mut greeting = Greeting::default();
//! MediaType::Json.decode(br#"{"name":"test"}"#, &mut greeting).unwrap();
//! assert_eq!(greeting.name, "test");
//!
//! let mut untouched = Greeting::default();
//! assert!(MediaType::TextPlain.decode(b"test", &mut untouched).is_err());
//! ```

pub mod error;
pub mod media_type;
pub mod target;

pub use error::{DecodeError, UnknownMediaType};
pub use media_type::MediaType;
pub use target::DecodeTarget;
