// SPDX-License-Identifier: MPL-2.0
//! HTTP source against a loopback server.

use iced_gallery::application::port::GallerySource;
use iced_gallery::domain::gallery::LoadError;
use iced_gallery::infrastructure::{SourceLayout, SourceLocation};
use iced_gallery::media;
use std::io::Cursor;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Semaphore;

type Routes = Arc<Vec<(&'static str, u16, Vec<u8>)>>;

/// Serves `routes` (path, status, body) on 127.0.0.1 and returns the gallery
/// base URL. Unknown paths answer 404.
async fn serve(routes: Vec<(&'static str, u16, Vec<u8>)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let routes: Routes = Arc::new(routes);

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let routes = Arc::clone(&routes);
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while read < buf.len() {
                    let n = stream.read(&mut buf[read..]).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                let (status, body) = routes
                    .iter()
                    .find(|(route, _, _)| *route == path)
                    .map(|(_, status, body)| (*status, body.clone()))
                    .unwrap_or((404, b"not found".to_vec()));

                let head = format!(
                    "HTTP/1.1 {status} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    reason(status),
                    body.len()
                );
                let _ = stream.write_all(head.as_bytes()).await;
                let _ = stream.write_all(&body).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{addr}/gallery/")
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

fn connect(base: &str) -> Arc<dyn GallerySource> {
    SourceLocation::parse(base)
        .expect("valid url")
        .connect(SourceLayout::default())
        .expect("client should build")
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([10, 20, 30, 255]));
    let mut bytes = Vec::new();
    image_rs::DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .expect("encode png");
    bytes
}

#[tokio::test]
async fn missing_manifest_is_http_404() {
    let base = serve(Vec::new()).await;
    let err = connect(&base)
        .fetch_manifest()
        .await
        .expect_err("no manifest is served");
    assert_eq!(err, LoadError::Http { status: 404 });
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let base = serve(vec![("/gallery/images.json", 500, b"boom".to_vec())]).await;
    let err = connect(&base)
        .fetch_manifest()
        .await
        .expect_err("server fails");
    assert_eq!(err, LoadError::Http { status: 500 });
}

#[tokio::test]
async fn manifest_is_parsed_in_order() {
    let manifest = br#"{"images":[{"name":"b.jpg","alt":"Bee"},{"name":"a.jpg"}]}"#.to_vec();
    let base = serve(vec![("/gallery/images.json", 200, manifest)]).await;

    let images = connect(&base).fetch_manifest().await.expect("manifest loads");

    let names: Vec<&str> = images.iter().map(|image| image.name()).collect();
    assert_eq!(names, ["b.jpg", "a.jpg"]);
    assert_eq!(images[0].alt_text(), "Bee");
    assert_eq!(images[1].alt_text(), "Gallery image");
}

#[tokio::test]
async fn invalid_json_is_malformed() {
    let base = serve(vec![("/gallery/images.json", 200, b"<html>".to_vec())]).await;
    let err = connect(&base)
        .fetch_manifest()
        .await
        .expect_err("not json");
    assert!(matches!(err, LoadError::Malformed(_)));
}

#[tokio::test]
async fn image_is_fetched_and_decoded() {
    let base = serve(vec![("/gallery/images/wide.png", 200, png(40, 20))]).await;
    let source = connect(&base);

    let loaded = media::load(source, "wide.png".to_string(), 10, Arc::new(Semaphore::new(2)))
        .await
        .expect("image loads");

    assert_eq!((loaded.width, loaded.height), (40, 20));
}

#[tokio::test]
async fn missing_image_is_http_404() {
    let base = serve(Vec::new()).await;
    let err = media::load(
        connect(&base),
        "gone.png".to_string(),
        64,
        Arc::new(Semaphore::new(1)),
    )
    .await
    .expect_err("no image is served");
    assert_eq!(err, LoadError::Http { status: 404 });
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = connect(&format!("http://{addr}/"))
        .fetch_manifest()
        .await
        .expect_err("nothing listens");
    assert!(matches!(err, LoadError::Network(_)));
}
