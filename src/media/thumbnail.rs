// SPDX-License-Identifier: MPL-2.0
//! Fetching and decoding of gallery images.
//!
//! Every image is decoded once: the card gets a downscaled RGBA thumbnail and
//! the lightbox gets a handle over the original bytes.

use crate::application::port::GallerySource;
use crate::domain::gallery::LoadError;
use iced::widget::image::Handle;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// A decoded gallery image, ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Downscaled copy shown on the card.
    pub thumbnail: Handle,
    /// Original bytes shown in the lightbox.
    pub full: Handle,
    /// Original width in pixels.
    pub width: u32,
    /// Original height in pixels.
    pub height: u32,
}

/// Decodes `bytes` and builds a thumbnail whose longest edge is at most
/// `max_edge`. Smaller images keep their size.
pub fn decode(bytes: Vec<u8>, max_edge: u32) -> Result<LoadedImage, LoadError> {
    let image = image_rs::load_from_memory(&bytes).map_err(|e| LoadError::Decode(e.to_string()))?;
    let (width, height) = (image.width(), image.height());

    let thumbnail = if width > max_edge || height > max_edge {
        image.thumbnail(max_edge, max_edge).to_rgba8()
    } else {
        image.to_rgba8()
    };

    Ok(LoadedImage {
        thumbnail: Handle::from_rgba(thumbnail.width(), thumbnail.height(), thumbnail.into_raw()),
        full: Handle::from_bytes(bytes),
        width,
        height,
    })
}

/// Fetches `name` from `source` and decodes it off the async runtime.
///
/// At most `permits.available_permits()` fetches run at once; decoding
/// happens after the permit is released.
pub async fn load(
    source: Arc<dyn GallerySource>,
    name: String,
    max_edge: u32,
    permits: Arc<Semaphore>,
) -> Result<LoadedImage, LoadError> {
    let bytes = {
        let _permit = permits
            .acquire_owned()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        source.fetch_image(&name).await?
    };

    tokio::task::spawn_blocking(move || decode(bytes, max_edge))
        .await
        .map_err(|e| LoadError::Decode(e.to_string()))?
}
