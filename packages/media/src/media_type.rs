//! The media type registry.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::error::{DecodeError, UnknownMediaType};

/// A wire content type, paired with how a body of that type is decoded.
///
/// The set is closed: each variant carries its canonical MIME string and a
/// fixed decode behavior, so asking to decode a type that has no decoder
/// always yields an explicit [`DecodeError::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml`
    Xml,
    /// `application/x-www-form-urlencoded` (cannot be decoded)
    UrlEncoded,
    /// `text/plain` (cannot be decoded)
    TextPlain,
    /// `text/xml`
    TextXml,
    /// `text/html`
    ///
    /// Decoded with the XML decoder on a best-effort basis. Only well-formed,
    /// XML-compatible markup will decode; this is not an HTML parser.
    Html,
    /// No body is expected. Renders as an empty string and decodes by doing
    /// nothing.
    NoContent,
}

impl MediaType {
    pub const ALL: [MediaType; 7] = [
        MediaType::Json,
        MediaType::Xml,
        MediaType::UrlEncoded,
        MediaType::TextPlain,
        MediaType::TextXml,
        MediaType::Html,
        MediaType::NoContent,
    ];

    /// The canonical MIME string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::Xml => "application/xml",
            MediaType::UrlEncoded => "application/x-www-form-urlencoded",
            MediaType::TextPlain => "text/plain",
            MediaType::TextXml => "text/xml",
            MediaType::Html => "text/html",
            MediaType::NoContent => "",
        }
    }

    /// Whether a declared `Content-Type` value contains this media type,
    /// ignoring case.
    ///
    /// `NoContent` matches everything, including an absent header.
    pub fn matches(&self, content_type: &str) -> bool {
        content_type.to_ascii_lowercase().contains(self.as_str())
    }

    /// Whether [`decode`](Self::decode) can ever succeed for this type.
    pub fn is_decodable(&self) -> bool {
        !matches!(self, MediaType::UrlEncoded | MediaType::TextPlain)
    }

    /// Decode `body` into `target`.
    ///
    /// `target` is only overwritten when decoding succeeds; on failure it
    /// keeps whatever value it held before.
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8], target: &mut T) -> Result<(), DecodeError> {
        match self {
            MediaType::Json => {
                *target = serde_json::from_slice(body).map_err(|e| self.malformed(e))?;
            }
            MediaType::Xml | MediaType::TextXml | MediaType::Html => {
                *target = quick_xml::de::from_reader(body).map_err(|e| self.malformed(e))?;
            }
            MediaType::UrlEncoded | MediaType::TextPlain => {
                return Err(DecodeError::Unsupported { media_type: *self });
            }
            MediaType::NoContent => {}
        }
        Ok(())
    }

    fn malformed(&self, source: impl std::error::Error + Send + Sync + 'static) -> DecodeError {
        DecodeError::Malformed {
            media_type: *self,
            source: Box::new(source),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for MediaType {
    type Err = UnknownMediaType;

    /// Parse a `Content-Type` style value. Parameters such as `charset` are
    /// ignored and matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = s.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        MediaType::ALL
            .into_iter()
            .find(|media_type| media_type.as_str() == essence)
            .ok_or_else(|| UnknownMediaType(s.to_string()))
    }
}
