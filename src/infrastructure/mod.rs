// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like
//! `reqwest`, `serde_json` and the filesystem.
//!
//! # Available Adapters
//!
//! - [`manifest`]: JSON manifest decoding shared by every source
//! - [`source`]: HTTP and directory sources (implement [`GallerySource`])
//!
//! [`GallerySource`]: crate::application::port::GallerySource

pub mod manifest;
pub mod source;

// Re-export main types for convenience
pub use source::{DirectorySource, HttpSource, SourceLayout, SourceLocation};
