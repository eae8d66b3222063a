#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Geographic feature types and the state abbreviation table.
//!
//! A [`GeoFeature`] is a county or state boundary polygon extracted from the
//! topology document. Victim totals are attached to county features by an
//! explicit preparation step after aggregation; until then the victim fields
//! are absent and no markers are produced for the feature.

pub mod states;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Whether a boundary polygon is a county or a state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureKind {
    /// County boundary polygon.
    County,
    /// State boundary polygon.
    State,
}

/// Properties carried by a boundary feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureProperties {
    /// Feature name as it appears in the topology document.
    pub name: String,
    /// Victims killed in this county, once attached. Absent until the
    /// preparation step runs; absent means no fatality marker.
    pub victims_killed: Option<u64>,
    /// Victims injured in this county, once attached. Absent until the
    /// preparation step runs; absent means no injury marker.
    pub victims_injured: Option<u64>,
}

impl FeatureProperties {
    /// Creates properties carrying only a name.
    #[must_use]
    pub const fn named(name: String) -> Self {
        Self {
            name,
            victims_killed: None,
            victims_injured: None,
        }
    }
}

/// A county or state boundary polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoFeature {
    /// Whether this is a county or a state.
    pub kind: FeatureKind,
    /// Name and any attached victim totals.
    pub properties: FeatureProperties,
    /// Exterior rings in lon/lat degrees. Each ring is closed (first and
    /// last positions equal). Interior rings are not retained.
    pub polygons: Vec<Vec<[f64; 2]>>,
}
