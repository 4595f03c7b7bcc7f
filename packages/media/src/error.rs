use crate::media_type::MediaType;

/// Failure to decode a body into a single target.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The media type has no decode behavior (URL-encoded, plain text).
    #[error("Unable to decode media type {media_type}")]
    Unsupported { media_type: MediaType },

    /// The body does not fit the target's structure.
    #[error("Malformed {media_type} body: {source}")]
    Malformed {
        media_type: MediaType,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DecodeError {
    pub fn media_type(&self) -> MediaType {
        match self {
            DecodeError::Unsupported { media_type } => *media_type,
            DecodeError::Malformed { media_type, .. } => *media_type,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, DecodeError::Unsupported { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DecodeError::Malformed { .. })
    }
}

/// A MIME string that does not name any known [`MediaType`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown media type: {0}")]
pub struct UnknownMediaType(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn unsupported_display_names_the_mime_type() {
        let err = DecodeError::Unsupported {
            media_type: MediaType::UrlEncoded,
        };
        assert_eq!(
            err.to_string(),
            "Unable to decode media type application/x-www-form-urlencoded"
        );
        assert!(err.is_unsupported());
        assert!(err.source().is_none());
    }

    #[test]
    fn malformed_preserves_source() {
        let inner = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = DecodeError::Malformed {
            media_type: MediaType::Json,
            source: Box::new(inner),
        };

        assert!(err.is_malformed());
        assert_eq!(err.media_type(), MediaType::Json);
        let source = err.source().expect("malformed error should carry a source");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }
}
