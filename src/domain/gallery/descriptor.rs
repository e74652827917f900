// SPDX-License-Identifier: MPL-2.0
//! Image descriptor value object.

/// Caption used when a manifest entry has no (or an empty) alt text.
pub const DEFAULT_ALT: &str = "Gallery image";

/// Directory, relative to the gallery base, that holds the image files.
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// One manifest entry: a file name and an optional caption.
///
/// Descriptors are immutable once loaded; a refresh replaces the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    name: String,
    alt: Option<String>,
}

impl ImageDescriptor {
    pub fn new(name: impl Into<String>, alt: Option<String>) -> Self {
        Self {
            name: name.into(),
            alt,
        }
    }

    /// File name relative to the images directory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Caption to display, falling back to [`DEFAULT_ALT`] when the alt is
    /// missing or empty.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        match self.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => DEFAULT_ALT,
        }
    }

    /// Path of the image relative to the gallery base, e.g. `images/a.jpg`.
    #[must_use]
    pub fn image_path(&self, images_dir: &str) -> String {
        format!("{}/{}", images_dir.trim_end_matches('/'), self.name)
    }
}
