//! Release index retrieval.
//!
//! The index is one JSON object keyed by product name. It is fetched with a
//! single GET per invocation and decoded in full; there is no cache and no
//! best-effort recovery from a malformed document.

use reqwest::Client;
use relm_schema::Catalog;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed release index: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Location of the index document under a releases base URL.
pub fn index_url(base_url: &str) -> String {
    format!("{}/index.json", base_url.trim_end_matches('/'))
}

/// Fetch and decode the release index at `url`.
///
/// The body is read to completion before decoding, so the connection is
/// released whether or not the payload turns out to be valid.
pub async fn fetch_catalog(client: &Client, url: &str) -> Result<Catalog, IndexError> {
    debug!("Fetching release index from {url}");

    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    debug!("Received {} bytes of index data", body.len());

    let catalog = decode_catalog(&body)?;
    info!("Loaded release index with {} products", catalog.len());
    Ok(catalog)
}

/// Decode an index document already held in memory.
pub fn decode_catalog(bytes: &[u8]) -> Result<Catalog, IndexError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const INDEX: &str = r#"{
        "widget": {
            "name": "widget",
            "versions": {
                "1.0.0": {
                    "name": "widget",
                    "version": "1.0.0",
                    "builds": [{
                        "name": "widget",
                        "version": "1.0.0",
                        "os": "linux",
                        "arch": "amd64",
                        "filename": "widget_1.0.0_linux_amd64.zip",
                        "url": "https://example/widget.zip"
                    }]
                }
            }
        },
        "consul": { "name": "consul", "versions": {} }
    }"#;

    #[test]
    fn test_index_url() {
        assert_eq!(
            index_url("https://releases.example.com"),
            "https://releases.example.com/index.json"
        );
        assert_eq!(
            index_url("https://releases.example.com/"),
            "https://releases.example.com/index.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_catalog() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/index.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(INDEX)
            .create_async()
            .await;

        let client = Client::new();
        let catalog = fetch_catalog(&client, &index_url(&server.url()))
            .await
            .unwrap();

        let names: Vec<&str> = catalog.products().collect();
        assert_eq!(names, vec!["consul", "widget"]);
        let version = catalog
            .get_release("widget")
            .unwrap()
            .get_version("1.0.0")
            .unwrap();
        assert_eq!(version.builds[0].filename, "widget_1.0.0_linux_amd64.zip");
    }

    #[tokio::test]
    async fn test_fetch_catalog_malformed_json() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/index.json")
            .with_status(200)
            .with_body("{ \"widget\": ")
            .create_async()
            .await;

        let client = Client::new();
        let err = fetch_catalog(&client, &index_url(&server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, IndexError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_fetch_catalog_http_status() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/index.json")
            .with_status(503)
            .create_async()
            .await;

        let client = Client::new();
        let err = fetch_catalog(&client, &index_url(&server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, IndexError::Http(_)), "got {err:?}");
    }

    #[test]
    fn test_decode_rejects_unexpected_types() {
        let err = decode_catalog(br#"{ "widget": { "name": 7, "versions": {} } }"#).unwrap_err();
        assert!(matches!(err, IndexError::Decode(_)));
    }
}
