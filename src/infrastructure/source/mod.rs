// SPDX-License-Identifier: MPL-2.0
//! Concrete gallery sources.
//!
//! A gallery lives at a base location that contains the manifest and an
//! images directory:
//!
//! ```text
//! <base>/images.json
//! <base>/images/<name>
//! ```
//!
//! The base is either an HTTP(S) URL ([`HttpSource`]) or a local directory
//! ([`DirectorySource`]). [`SourceLocation::parse`] picks the adapter from the
//! string given on the command line or in `settings.toml`.

mod directory;
mod http;

pub use directory::DirectorySource;
pub use http::HttpSource;

use crate::application::port::GallerySource;
use crate::config::{DEFAULT_IMAGES_DIR, DEFAULT_MANIFEST_NAME};
use crate::domain::gallery::LoadError;
use crate::error::{Error, Result};
use reqwest::Url;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// File names used inside the base location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub manifest_name: String,
    pub images_dir: String,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            images_dir: DEFAULT_IMAGES_DIR.to_string(),
        }
    }
}

/// Where the gallery is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Http(Url),
    Directory(PathBuf),
}

impl SourceLocation {
    /// `http://` and `https://` strings select HTTP; anything else is a
    /// directory path.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|e| Error::Config(format!("invalid gallery URL {trimmed}: {e}")))?;
            return Ok(SourceLocation::Http(url));
        }
        if trimmed.is_empty() {
            return Ok(SourceLocation::Directory(PathBuf::from(".")));
        }
        Ok(SourceLocation::Directory(PathBuf::from(trimmed)))
    }

    /// Builds the adapter for this location.
    pub fn connect(self, layout: SourceLayout) -> Result<Arc<dyn GallerySource>> {
        match self {
            SourceLocation::Http(url) => Ok(Arc::new(HttpSource::new(url, layout)?)),
            SourceLocation::Directory(root) => Ok(Arc::new(DirectorySource::new(root, layout))),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Http(url) => write!(f, "{url}"),
            SourceLocation::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Splits an image name into path segments, rejecting anything that could
/// leave the images directory.
pub(crate) fn name_segments(name: &str) -> std::result::Result<Vec<&str>, LoadError> {
    if name.is_empty() || name.starts_with('/') || name.contains('\\') {
        return Err(LoadError::InvalidName(name.to_string()));
    }
    let segments: Vec<&str> = name.split('/').collect();
    if segments
        .iter()
        .any(|segment| segment.is_empty() || *segment == "." || *segment == "..")
    {
        return Err(LoadError::InvalidName(name.to_string()));
    }
    Ok(segments)
}
