// SPDX-License-Identifier: MPL-2.0
//! Local directory gallery source backed by `tokio::fs`.

use super::{name_segments, SourceLayout};
use crate::application::port::{GallerySource, SourceFuture};
use crate::domain::gallery::{ImageDescriptor, LoadError};
use crate::infrastructure::manifest;
use futures_util::FutureExt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    layout: SourceLayout,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, layout: SourceLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.layout.manifest_name)
    }

    /// Path of `images/<name>`; names that would escape the images
    /// directory are rejected.
    pub fn image_path(&self, name: &str) -> Result<PathBuf, LoadError> {
        let segments = name_segments(name)?;
        // Windows reads `C:` as a drive prefix and `a:b` as a data stream
        if cfg!(windows) && segments.iter().any(|segment| segment.contains(':')) {
            return Err(LoadError::InvalidName(name.to_string()));
        }
        let mut path = self.root.join(&self.layout.images_dir);
        path.extend(segments);
        Ok(path)
    }
}

impl GallerySource for DirectorySource {
    fn fetch_manifest(&self) -> SourceFuture<Vec<ImageDescriptor>> {
        let path = self.manifest_path();
        async move {
            let bytes = tokio::fs::read(&path).await?;
            manifest::parse(&bytes)
        }
        .boxed()
    }

    fn fetch_image(&self, name: &str) -> SourceFuture<Vec<u8>> {
        let path = self.image_path(name);
        async move { Ok::<_, LoadError>(tokio::fs::read(path?).await?) }.boxed()
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
