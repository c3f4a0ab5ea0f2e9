use std::path::Path;

use tracing::info;

use crate::config::Source;
use crate::error::{Error, Result};

/// GET `url` and return the body decoded per the response charset.
pub async fn fetch_page(url: &str) -> Result<String> {
    let network = |source| Error::Network {
        url: url.to_string(),
        source,
    };

    info!("Fetching teachers page: {}", url);
    let response = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(network)?;

    let body = response.text().await.map_err(network)?;
    info!("Fetched {} bytes", body.len());
    Ok(body)
}

/// Read a previously saved page.
pub async fn read_page(path: &Path) -> Result<String> {
    info!("Reading teachers page from {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
}

pub async fn load_page(source: &Source) -> Result<String> {
    match source {
        Source::Url(url) => fetch_page(url).await,
        Source::File(path) => read_page(path).await,
    }
}
