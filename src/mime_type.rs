use mime::{APPLICATION_OCTET_STREAM, Mime};

/// Guesses a content type of a file from its name.
pub fn content_type(file_name: &str) -> Mime {
    mime_guess::from_path(file_name)
        .first()
        .unwrap_or(APPLICATION_OCTET_STREAM)
}
