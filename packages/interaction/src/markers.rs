//! Marker-category toggles.
//!
//! Three controls fully determine the visibility of both marker classes on
//! every click; nothing is merged with previous state, so each click is
//! idempotent.

use incident_map_render::{MarkerKind, Scene};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Which marker categories are shown.
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
pub enum MarkerFilter {
    /// Show fatality circles, hide injury triangles.
    Fatal,
    /// Show injury triangles, hide fatality circles.
    NonFatal,
    /// Show both marker categories.
    Both,
}

impl MarkerFilter {
    /// Whether markers of `kind` are shown under this filter.
    #[must_use]
    pub const fn shows(self, kind: MarkerKind) -> bool {
        match self {
            Self::Fatal => matches!(kind, MarkerKind::Circle),
            Self::NonFatal => matches!(kind, MarkerKind::Triangle),
            Self::Both => true,
        }
    }
}

/// Overwrites the display state of every marker per the filter.
pub fn apply_marker_filter(scene: &mut Scene, filter: MarkerFilter) {
    for marker in &mut scene.markers {
        marker.display = filter.shows(marker.kind());
    }
}
