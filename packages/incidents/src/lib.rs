#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident table decoding and victim aggregation.
//!
//! Decodes the delimited incident table into [`IncidentRecord`]s and reduces
//! them into per-county and per-state victim totals. Malformed numeric fields
//! degrade to zero rather than failing; a structurally unreadable table is an
//! error.
//!
//! [`IncidentRecord`]: incident_map_incident_models::IncidentRecord

pub mod aggregate;
pub mod fetch;
pub mod parse;

use thiserror::Error;

/// Errors that can occur while loading the incident table.
#[derive(Debug, Error)]
pub enum IncidentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local file read failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The table could not be read as delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The table is structurally unusable (e.g. missing a required column).
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}
