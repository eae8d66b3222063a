#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident record and victim aggregate types.
//!
//! An [`IncidentRecord`] is one row of the source table, kept exactly as it
//! appears there: location keys are never re-cased or trimmed, so aggregate
//! keys always match the source spelling.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One incident row from the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// Full state name as it appears in the source (e.g. "Texas").
    pub state: String,
    /// County or city name as it appears in the source.
    pub county_or_city: String,
    /// Number of victims killed. Zero when the source field was missing or
    /// unparseable.
    pub victims_killed: u32,
    /// Number of victims injured. Zero when the source field was missing or
    /// unparseable.
    pub victims_injured: u32,
    /// Raw incident date text, if the source provided one. Only ever used
    /// for display filtering, never aggregated.
    pub incident_date: Option<String>,
}

/// Victim totals for a single county or city.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VictimTotals {
    /// Total victims killed.
    pub killed: u64,
    /// Total victims injured.
    pub injured: u64,
}

/// Victim totals for a single state.
///
/// The `killed_state`/`injured_state` fields duplicate `killed`/`injured`;
/// both copies are kept because downstream styling consumes them separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateTotals {
    /// Total victims killed.
    pub killed: u64,
    /// Total victims injured.
    pub injured: u64,
    /// State-level copy of `killed`.
    pub killed_state: u64,
    /// State-level copy of `injured`.
    pub injured_state: u64,
}

/// Per-county aggregates keyed by the source's county/city spelling.
pub type CountyTotalsMap = BTreeMap<String, VictimTotals>;

/// Per-state aggregates keyed by the source's full state name.
pub type StateTotalsMap = BTreeMap<String, StateTotals>;
