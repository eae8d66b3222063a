#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Boundary topology decoding and geo/data joining.
//!
//! Decodes the topology document (two named geometry collections, `counties`
//! and `states`, over a shared delta-encoded arc pool) into
//! [`GeoFeature`]s, joins them against aggregated incident data, and exports
//! county features as `GeoJSON` for interop.
//!
//! [`GeoFeature`]: incident_map_geography_models::GeoFeature

pub mod export;
pub mod fetch;
pub mod join;
pub mod topology;

use thiserror::Error;

/// Errors that can occur while loading boundary data.
#[derive(Debug, Error)]
pub enum GeographyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local file read failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Data conversion error.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}
