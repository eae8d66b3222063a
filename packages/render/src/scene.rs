//! The rendered shape set.
//!
//! A [`Scene`] is everything the interaction layer is allowed to touch:
//! boundary shapes with their CSS-style class sets and victim markers with
//! their display state. Shapes are bound to features by position in the
//! feature list (an index join); the feature list only ever grows, so
//! reconciliation appends and never deletes.

use std::collections::BTreeSet;

use incident_map_geography_models::{FeatureKind, GeoFeature};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::path;
use crate::projection::Projection;

/// Initial fill for every boundary shape.
pub const NEUTRAL_FILL: &str = "white";

/// Fatality-marker radius in viewport units.
pub const MARKER_RADIUS: f64 = 3.0;

/// Vertical offset of the fatality marker above the centroid.
pub const CIRCLE_OFFSET_Y: f64 = 5.0;

/// Half-width of the injury-marker triangle.
pub const TRIANGLE_HALF_WIDTH: f64 = 3.0;

/// Which marker category a marker belongs to.
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
pub enum MarkerKind {
    /// Fatality marker (circle).
    Circle,
    /// Injury marker (triangle).
    Triangle,
}

/// A boundary shape bound to one feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Whether the bound feature is a county or a state.
    pub kind: FeatureKind,
    /// Feature name.
    pub name: String,
    /// SVG-style path data. Empty when the projection clipped the whole
    /// feature.
    pub path: String,
    /// Current fill color.
    pub fill: String,
    /// Hover-label source (the feature name).
    pub title: String,
    /// CSS-style class set the interaction layer mutates.
    pub classes: BTreeSet<String>,
    /// Whether the shape is currently shown.
    pub display: bool,
    /// Current geometric transform, if any.
    pub transform: Option<String>,
}

/// Marker geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum MarkerShape {
    /// Fatality circle.
    Circle {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Radius.
        r: f64,
    },
    /// Injury triangle.
    Triangle {
        /// SVG-style path data.
        path: String,
    },
}

/// A victim marker anchored at a county's projected centroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// County the marker belongs to.
    pub county: String,
    /// Marker geometry.
    pub shape: MarkerShape,
    /// Whether the marker is currently shown.
    pub display: bool,
    /// Current geometric transform, if any.
    pub transform: Option<String>,
}

impl Marker {
    /// Which marker category this marker belongs to.
    #[must_use]
    pub const fn kind(&self) -> MarkerKind {
        match self.shape {
            MarkerShape::Circle { .. } => MarkerKind::Circle,
            MarkerShape::Triangle { .. } => MarkerKind::Triangle,
        }
    }
}

/// The rendered shape set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Boundary shapes, counties first then states, in feature order.
    pub shapes: Vec<Shape>,
    /// Victim markers in feature order.
    pub markers: Vec<Marker>,
}

impl Scene {
    /// Shapes currently shown.
    pub fn visible_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|shape| shape.display)
    }

    /// Markers of one category currently shown.
    pub fn visible_markers(&self, kind: MarkerKind) -> impl Iterator<Item = &Marker> {
        self.markers
            .iter()
            .filter(move |marker| marker.display && marker.kind() == kind)
    }
}

/// Binds any not-yet-bound features into the scene.
///
/// The explicit reconciliation that replaces a charting library's
/// selection/join: features already bound (by index) are left alone, new
/// ones get a shape and, for counties with positive victim totals, a
/// fatality circle at the projected centroid (offset
/// [`CIRCLE_OFFSET_Y`] upward, radius [`MARKER_RADIUS`]) and/or an injury
/// triangle (half-width [`TRIANGLE_HALF_WIDTH`]) centered on the centroid.
/// Calling it again with the same feature list is a no-op.
pub fn reconcile(scene: &mut Scene, features: &[GeoFeature], projection: &dyn Projection) {
    // One shape per bound feature, so the shape count is the bound count.
    let new_features = features.get(scene.shapes.len()..).unwrap_or_default();

    for feature in new_features {
        scene.shapes.push(Shape {
            kind: feature.kind,
            name: feature.properties.name.clone(),
            path: path::path_data(feature, projection).unwrap_or_default(),
            fill: NEUTRAL_FILL.to_owned(),
            title: feature.properties.name.clone(),
            classes: BTreeSet::new(),
            display: true,
            transform: None,
        });

        if feature.kind != FeatureKind::County {
            continue;
        }

        let Some([x, y]) = path::projected_centroid(feature, projection) else {
            continue;
        };

        if feature.properties.victims_killed.unwrap_or(0) > 0 {
            scene.markers.push(Marker {
                county: feature.properties.name.clone(),
                shape: MarkerShape::Circle {
                    cx: x,
                    cy: y - CIRCLE_OFFSET_Y,
                    r: MARKER_RADIUS,
                },
                display: true,
                transform: None,
            });
        }

        if feature.properties.victims_injured.unwrap_or(0) > 0 {
            scene.markers.push(Marker {
                county: feature.properties.name.clone(),
                shape: MarkerShape::Triangle {
                    path: path::triangle_path([x, y], TRIANGLE_HALF_WIDTH),
                },
                display: true,
                transform: None,
            });
        }
    }

    log::debug!(
        "Scene holds {} shapes and {} markers",
        scene.shapes.len(),
        scene.markers.len()
    );
}
