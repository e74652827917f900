// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Reasons a manifest or image could not be loaded.
///
/// The gallery surfaces every manifest failure the same way (error panel);
/// the variants exist for logging and the optional detail line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Server answered with a non-success HTTP status.
    Http { status: u16 },

    /// Request could not be sent or the response body could not be read.
    Network(String),

    /// Local file could not be read.
    Io(String),

    /// Manifest body is not the expected JSON shape.
    Malformed(String),

    /// Image name would escape the images directory.
    InvalidName(String),

    /// Image bytes could not be decoded.
    Decode(String),
}

impl LoadError {
    /// Returns the i18n message key describing this failure.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadError::Http { .. } => "error-load-http",
            LoadError::Network(_) => "error-load-network",
            LoadError::Io(_) => "error-load-io",
            LoadError::Malformed(_) => "error-load-malformed",
            LoadError::InvalidName(_) => "error-load-invalid-name",
            LoadError::Decode(_) => "error-load-decode",
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Http { status } => write!(f, "HTTP status {}", status),
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::Malformed(msg) => write!(f, "Malformed manifest: {}", msg),
            LoadError::InvalidName(name) => write!(f, "Invalid image name: {}", name),
            LoadError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}
