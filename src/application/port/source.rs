// SPDX-License-Identifier: MPL-2.0
//! Gallery source port.
//!
//! A source knows how to fetch the manifest (already parsed into
//! descriptors) and the raw bytes of a single image. The HTTP and directory
//! adapters live in `infrastructure::source`; tests use in-memory fakes.
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::port::GallerySource;
//! use std::sync::Arc;
//!
//! async fn count(source: Arc<dyn GallerySource>) -> usize {
//!     source.fetch_manifest().await.map(|images| images.len()).unwrap_or(0)
//! }
//! ```

use crate::domain::gallery::{ImageDescriptor, LoadError};
use futures_util::future::BoxFuture;
use std::fmt;

/// Future returned by every source fetch.
pub type SourceFuture<T> = BoxFuture<'static, Result<T, LoadError>>;

pub trait GallerySource: Send + Sync + fmt::Debug {
    /// Fetches and parses the manifest, preserving its order.
    fn fetch_manifest(&self) -> SourceFuture<Vec<ImageDescriptor>>;

    /// Fetches the encoded bytes of the image called `name`.
    fn fetch_image(&self, name: &str) -> SourceFuture<Vec<u8>>;

    /// Human-readable location used in logs and the header.
    fn describe(&self) -> String;
}
