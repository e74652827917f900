// SPDX-License-Identifier: MPL-2.0
//! HTTP gallery source backed by `reqwest`.

use super::{name_segments, SourceLayout};
use crate::application::port::{GallerySource, SourceFuture};
use crate::domain::gallery::{ImageDescriptor, LoadError};
use crate::infrastructure::manifest;
use futures_util::FutureExt;
use reqwest::{Client, Url};

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base: Url,
    layout: SourceLayout,
}

impl HttpSource {
    /// Creates a source rooted at `base`. A missing trailing slash is added so
    /// that `https://host/gallery` and `https://host/gallery/` behave the same.
    pub fn new(base: Url, layout: SourceLayout) -> Result<Self, LoadError> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base: with_trailing_slash(base),
            layout,
        })
    }

    /// URL of the manifest. The base query string, if any, is kept.
    pub fn manifest_url(&self) -> Result<Url, LoadError> {
        let name = &self.layout.manifest_name;
        self.under_base(name.split('/').filter(|s| !s.is_empty()), name)
    }

    /// URL of `images/<name>`, each path segment percent-encoded.
    pub fn image_url(&self, name: &str) -> Result<Url, LoadError> {
        let segments = name_segments(name)?;
        let dir = self.layout.images_dir.split('/').filter(|s| !s.is_empty());
        self.under_base(dir.chain(segments), name)
    }

    fn under_base<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
        name: &str,
    ) -> Result<Url, LoadError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| LoadError::InvalidName(name.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }
}

impl GallerySource for HttpSource {
    fn fetch_manifest(&self) -> SourceFuture<Vec<ImageDescriptor>> {
        let client = self.client.clone();
        let url = self.manifest_url();
        async move {
            let bytes = get_bytes(&client, url?).await?;
            manifest::parse(&bytes)
        }
        .boxed()
    }

    fn fetch_image(&self, name: &str) -> SourceFuture<Vec<u8>> {
        let client = self.client.clone();
        let url = self.image_url(name);
        async move { get_bytes(&client, url?).await }.boxed()
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

async fn get_bytes(client: &Client, url: Url) -> Result<Vec<u8>, LoadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LoadError::Http {
            status: response.status().as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    Ok(body.to_vec())
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> HttpSource {
        HttpSource::new(Url::parse(base).expect("valid url"), SourceLayout::default())
            .expect("client should build")
    }

    #[test]
    fn manifest_sits_next_to_base() {
        let source = source("https://example.com/gallery");
        assert_eq!(
            source.manifest_url().expect("url").as_str(),
            "https://example.com/gallery/images.json"
        );
    }

    #[test]
    fn image_url_is_under_images_dir() {
        let source = source("https://example.com/gallery/");
        assert_eq!(
            source.image_url("a.jpg").expect("url").as_str(),
            "https://example.com/gallery/images/a.jpg"
        );
    }

    #[test]
    fn image_names_are_percent_encoded() {
        let source = source("https://example.com/");
        assert_eq!(
            source.image_url("my photo#1.jpg").expect("url").as_str(),
            "https://example.com/images/my%20photo%231.jpg"
        );
    }

    #[test]
    fn base_query_is_kept_for_manifest_and_images() {
        let source = source("https://example.com/g?token=abc");
        assert_eq!(
            source.manifest_url().expect("url").as_str(),
            "https://example.com/g/images.json?token=abc"
        );
        assert_eq!(
            source.image_url("a.jpg").expect("url").as_str(),
            "https://example.com/g/images/a.jpg?token=abc"
        );
    }

    #[test]
    fn colon_names_keep_their_colon() {
        let source = source("https://example.com/");
        assert_eq!(
            source.image_url("2024-05-01 12:30.jpg").expect("url").as_str(),
            "https://example.com/images/2024-05-01%2012:30.jpg"
        );
    }

    #[test]
    fn traversal_is_rejected_before_any_request() {
        let source = source("https://example.com/");
        assert!(matches!(
            source.image_url("../admin"),
            Err(LoadError::InvalidName(_))
        ));
    }

    #[test]
    fn describe_reports_base() {
        assert_eq!(source("http://localhost:8080").describe(), "http://localhost:8080/");
    }
}
