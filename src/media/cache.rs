// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache shared across refreshes.
//!
//! A refresh that returns names already seen reuses their decoded images
//! instead of fetching them again. Entries are keyed by image name and
//! evicted least-recently-used first.

use super::thumbnail::LoadedImage;
use crate::config::DEFAULT_CACHE_CAPACITY;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Hit/miss counters, reported in debug logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
}

/// LRU cache of decoded images keyed by image name.
#[derive(Debug)]
pub struct ThumbnailCache {
    entries: LruCache<String, LoadedImage>,
    stats: CacheStats,
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl ThumbnailCache {
    /// Creates a cache holding at most `capacity` images (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            stats: CacheStats::default(),
        }
    }

    /// Looks up `name`, marking it most recently used.
    pub fn get(&mut self, name: &str) -> Option<LoadedImage> {
        match self.entries.get(name) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, name: String, image: LoadedImage) {
        self.entries.put(name, image);
        self.stats.insertions += 1;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
