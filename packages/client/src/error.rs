use fluent_rest_media::DecodeError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// The transport rejected the request before sending it.
    #[error("Failed to build request: {0}")]
    RequestBuild(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Network-level failure during the exchange.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response's `Content-Type` does not contain the requested `Accept`
    /// type, so its body was never decoded.
    #[error("Expected response Content-Type [{actual}] to match/contain request Accept [{expected}]")]
    ContentTypeMismatch { expected: String, actual: String },

    /// Every decode target failed; one error per target, in target order.
    #[error("Unable to decode response into any of {} targets", .0.len())]
    AllTargetsFailed(Vec<DecodeError>),
}

impl Error {
    /// The request could not be constructed (bad URL, header, or body).
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl { .. }
                | Error::InvalidHeaderName(_)
                | Error::InvalidHeaderValue(_)
                | Error::RequestBuild(_)
        )
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// The per-target decode errors, empty unless every target failed.
    pub fn decode_errors(&self) -> &[DecodeError] {
        match self {
            Error::AllTargetsFailed(errors) => errors,
            _ => &[],
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Error::RequestBuild(Box::new(error))
        } else {
            Error::Transport(Box::new(error))
        }
    }
}
