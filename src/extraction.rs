use crate::http_client::HttpClientError;

/// A strategy to extract a response body.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Extraction {
    /// UTF-8 text.
    Text,
    /// Raw bytes.
    Bytes,
}

impl Extraction {
    /// Extracts a payload from a response body.
    pub fn extract(self, body: Vec<u8>) -> Result<Payload, HttpClientError> {
        Ok(match self {
            Self::Text => Payload::Text(String::from_utf8(body)?),
            Self::Bytes => Payload::Bytes(body),
        })
    }
}

/// An extracted response body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Payload {
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Payload {
    /// Returns text.
    pub fn into_text(self) -> Result<String, HttpClientError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Bytes(_) => Err(HttpClientError::Extraction(
                "bytes extracted for text".into(),
            )),
        }
    }

    /// Returns bytes.
    pub fn into_bytes(self) -> Result<Vec<u8>, HttpClientError> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Text(_) => Err(HttpClientError::Extraction(
                "text extracted for bytes".into(),
            )),
        }
    }
}
