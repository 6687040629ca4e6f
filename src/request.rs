use crate::mime_type::content_type;
use mime::{APPLICATION_JSON, Mime};

/// A request body.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// A text body.
    Text {
        /// Content.
        content: String,
        /// A content type.
        content_type: Mime,
    },
    /// A multipart body of a text payload and a file.
    Multipart {
        /// A text payload sent as a `payload` part.
        payload: String,
        /// A file sent as a `file` part.
        file: FilePart,
    },
}

impl RequestBody {
    /// Creates a JSON body.
    pub const fn json(content: String) -> Self {
        Self::Text {
            content,
            content_type: APPLICATION_JSON,
        }
    }

    /// Creates a multipart body with a content type guessed from a file name.
    pub fn multipart(payload: String, file_name: &str, bytes: Vec<u8>) -> Self {
        Self::Multipart {
            payload,
            file: FilePart {
                content_type: content_type(file_name),
                name: file_name.into(),
                bytes,
            },
        }
    }
}

/// A file part of a multipart body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilePart {
    /// A file name.
    pub name: String,
    /// File content.
    pub bytes: Vec<u8>,
    /// A content type.
    pub content_type: Mime,
}
