//! Incident table fetcher.
//!
//! Loads the delimited incident table from an `http(s)` URL or a local
//! path, then decodes it.

use incident_map_incident_models::IncidentRecord;

use crate::{IncidentError, parse};

/// Fetches and decodes the incident table.
///
/// `source` is treated as a URL when it starts with `http://` or
/// `https://`, otherwise as a local file path.
///
/// # Errors
///
/// Returns [`IncidentError`] if the request or file read fails, the
/// response status is not successful, or the table cannot be decoded.
pub async fn fetch_incidents(
    client: &reqwest::Client,
    source: &str,
) -> Result<Vec<IncidentRecord>, IncidentError> {
    let text = if source.starts_with("http://") || source.starts_with("https://") {
        log::info!("Downloading incident table from {source}");
        client
            .get(source)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?
    } else {
        log::info!("Reading incident table from {source}");
        std::fs::read_to_string(source)?
    };

    let records = parse::decode_incidents(&text)?;
    log::info!("Loaded {} incident records from {source}", records.len());

    Ok(records)
}
