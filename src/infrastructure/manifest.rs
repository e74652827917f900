// SPDX-License-Identifier: MPL-2.0
//! Manifest decoding.
//!
//! The manifest is a JSON document of the form
//! `{ "images": [ { "name": "a.jpg", "alt": "A" }, ... ] }`. Unknown fields
//! are ignored; a missing `images` array is a malformed manifest.

use crate::domain::gallery::{ImageDescriptor, LoadError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ManifestDto {
    images: Vec<ImageEntryDto>,
}

#[derive(Debug, Deserialize)]
struct ImageEntryDto {
    name: String,
    #[serde(default)]
    alt: Option<String>,
}

/// Parses manifest bytes into descriptors, preserving manifest order.
pub fn parse(bytes: &[u8]) -> Result<Vec<ImageDescriptor>, LoadError> {
    let manifest: ManifestDto =
        serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed(e.to_string()))?;

    Ok(manifest
        .images
        .into_iter()
        .map(|entry| ImageDescriptor::new(entry.name, entry.alt))
        .collect())
}
