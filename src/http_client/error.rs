use alloc::{string::FromUtf8Error, sync::Arc};
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use http::{Method, StatusCode};

/// An HTTP client error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HttpClientError {
    /// A remote service responded with an error status.
    Communication {
        /// A request method.
        method: Method,
        /// A request target path.
        target: Arc<str>,
        /// A response status.
        status: StatusCode,
        /// A reason phrase of the response status.
        reason: Arc<str>,
    },
    /// A response body could not be extracted.
    Extraction(Arc<str>),
    /// An invalid credential.
    InvalidCredential(Arc<str>),
    /// A request could not be completed.
    Transport(Arc<str>),
    /// A request target could not be resolved.
    UrlParse(Arc<str>),
}

impl Error for HttpClientError {}

impl Display for HttpClientError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Communication {
                method,
                target,
                status,
                reason,
            } => write!(
                formatter,
                "{method} {target} failed with status {} {reason}",
                status.as_u16()
            ),
            Self::Extraction(error) => write!(formatter, "cannot extract response body: {error}"),
            Self::InvalidCredential(error) => write!(formatter, "invalid credential: {error}"),
            Self::Transport(error) => write!(formatter, "{error}"),
            Self::UrlParse(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<url::ParseError> for HttpClientError {
    fn from(error: url::ParseError) -> Self {
        Self::UrlParse(error.to_string().into())
    }
}

impl From<FromUtf8Error> for HttpClientError {
    fn from(error: FromUtf8Error) -> Self {
        Self::Extraction(error.to_string().into())
    }
}

impl From<http::header::InvalidHeaderValue> for HttpClientError {
    fn from(error: http::header::InvalidHeaderValue) -> Self {
        Self::InvalidCredential(error.to_string().into())
    }
}
