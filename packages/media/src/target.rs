//! Decode targets: type-erased slots a response body can be decoded into.

use serde::de::DeserializeOwned;

use crate::error::DecodeError;
use crate::media_type::MediaType;

/// A caller-owned entity that a body can be decoded into.
///
/// Implemented for every `DeserializeOwned` type, so callers pass
/// `&mut my_value` wherever a `&mut dyn DecodeTarget` is expected. Being
/// object-safe lets a single request carry several differently-shaped
/// candidates at once.
pub trait DecodeTarget {
    /// Decode `body` as `media_type` into `self`, overwriting it on success.
    fn decode_from(&mut self, media_type: MediaType, body: &[u8]) -> Result<(), DecodeError>;
}

impl<T: DeserializeOwned> DecodeTarget for T {
    fn decode_from(&mut self, media_type: MediaType, body: &[u8]) -> Result<(), DecodeError> {
        media_type.decode(body, self)
    }
}
