//! Topology document fetcher.

use crate::{GeographyError, topology::Topology};

/// Fetches and decodes the boundary topology document.
///
/// `source` is treated as a URL when it starts with `http://` or
/// `https://`, otherwise as a local file path.
///
/// # Errors
///
/// Returns [`GeographyError`] if the request or file read fails, the
/// response status is not successful, or the document cannot be decoded.
pub async fn fetch_topology(
    client: &reqwest::Client,
    source: &str,
) -> Result<Topology, GeographyError> {
    let text = if source.starts_with("http://") || source.starts_with("https://") {
        log::info!("Downloading topology document from {source}");
        client
            .get(source)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?
    } else {
        log::info!("Reading topology document from {source}");
        std::fs::read_to_string(source)?
    };

    Topology::from_json(&text)
}
