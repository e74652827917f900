// SPDX-License-Identifier: MPL-2.0
//! Image fetching, decoding and caching for the gallery.

pub mod cache;
pub mod thumbnail;

pub use cache::{CacheStats, ThumbnailCache};
pub use thumbnail::{decode, load, LoadedImage};
