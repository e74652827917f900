// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Source**: Manifest and images directory names
//! - **Thumbnails**: Downscaled card image size and cache capacity
//! - **Fetching**: Concurrent image request limit
//! - **Refresh**: Optional periodic manifest reload
//! - **Animation**: Card entrance timing

use std::time::Duration;

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Base location used when neither the CLI nor the config names one.
pub const DEFAULT_SOURCE: &str = ".";

/// Manifest file name, relative to the gallery base.
pub const DEFAULT_MANIFEST_NAME: &str = "images.json";

pub use crate::domain::gallery::DEFAULT_IMAGES_DIR;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Longest edge of a card thumbnail in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 384;

/// Minimum thumbnail edge.
pub const MIN_THUMBNAIL_SIZE: u32 = 64;

/// Maximum thumbnail edge.
pub const MAX_THUMBNAIL_SIZE: u32 = 1024;

/// Number of decoded images kept across refreshes.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Minimum cache capacity.
pub const MIN_CACHE_CAPACITY: usize = 1;

/// Maximum cache capacity.
pub const MAX_CACHE_CAPACITY: usize = 4096;

// ==========================================================================
// Fetch Defaults
// ==========================================================================

/// Image requests allowed in flight at once.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 6;

/// Minimum concurrent fetches.
pub const MIN_CONCURRENT_FETCHES: usize = 1;

/// Maximum concurrent fetches.
pub const MAX_CONCURRENT_FETCHES: usize = 32;

// ==========================================================================
// Refresh Defaults
// ==========================================================================

/// Shortest accepted auto-refresh interval.
pub const MIN_AUTO_REFRESH_SECS: u64 = 5;

/// Longest accepted auto-refresh interval (one day).
pub const MAX_AUTO_REFRESH_SECS: u64 = 86_400;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Delay between the entrance of two consecutive cards.
pub const CARD_STAGGER: Duration = Duration::from_millis(100);

/// Duration of one card's fade/slide-in.
pub const CARD_TRANSITION: Duration = Duration::from_millis(600);

/// Initial downward offset of a card before it slides in (logical pixels).
pub const CARD_ENTRANCE_OFFSET: f32 = 20.0;

/// Tick interval driving animations while any is running (~60 fps).
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

const _: () = {
    assert!(MIN_THUMBNAIL_SIZE <= DEFAULT_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
    assert!(MIN_CONCURRENT_FETCHES <= DEFAULT_MAX_CONCURRENT_FETCHES);
    assert!(DEFAULT_MAX_CONCURRENT_FETCHES <= MAX_CONCURRENT_FETCHES);
    assert!(MIN_AUTO_REFRESH_SECS <= MAX_AUTO_REFRESH_SECS);
};
