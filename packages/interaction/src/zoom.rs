//! Zoom and pan.
//!
//! Gesture recognition belongs to the host; this module owns the transform
//! arithmetic. Every zoom event applies one transform uniformly to every
//! shape and marker. Double-click doubles the scale about the clicked
//! point, the reset control returns to identity, both animated over
//! [`TRANSITION_DURATION`].

use std::time::Duration;

use incident_map_render::Scene;
use serde::{Deserialize, Serialize};

/// Allowed scale range.
pub const SCALE_EXTENT: (f64, f64) = (1.0, 8.0);

/// Scale multiplier for a double-click.
pub const DOUBLE_CLICK_FACTOR: f64 = 2.0;

/// Animation duration for double-click and reset zooms.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// A zoom transform: scale `k` after translation `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomTransform {
    /// Scale factor.
    pub k: f64,
    /// Horizontal translation.
    pub x: f64,
    /// Vertical translation.
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Renders the transform as an SVG-style attribute value.
    #[must_use]
    pub fn to_attribute(self) -> String {
        format!("translate({},{}) scale({})", self.x, self.y, self.k)
    }

    /// Rescales to `k` (clamped to [`SCALE_EXTENT`]) keeping the viewport
    /// point `point` over the same map point.
    #[must_use]
    pub fn scaled_about(self, k: f64, point: [f64; 2]) -> Self {
        let k = k.clamp(SCALE_EXTENT.0, SCALE_EXTENT.1);

        // Map point currently under the viewport point.
        let qx = (point[0] - self.x) / self.k;
        let qy = (point[1] - self.y) / self.k;

        Self {
            k,
            x: point[0] - qx * k,
            y: point[1] - qy * k,
        }
    }
}

/// An animated zoom: the transform to tween to and how long to take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomCommand {
    /// Transform to end at.
    pub target: ZoomTransform,
    /// Animation duration.
    pub duration: Duration,
}

/// Applies a transform uniformly to every shape and every marker.
pub fn apply_transform(scene: &mut Scene, transform: ZoomTransform) {
    let attribute = transform.to_attribute();

    for shape in &mut scene.shapes {
        shape.transform = Some(attribute.clone());
    }
    for marker in &mut scene.markers {
        marker.transform = Some(attribute.clone());
    }
}

/// Double-click: double the current scale about the clicked point,
/// animated.
#[must_use]
pub fn double_click(current: ZoomTransform, point: [f64; 2]) -> ZoomCommand {
    ZoomCommand {
        target: current.scaled_about(current.k * DOUBLE_CLICK_FACTOR, point),
        duration: TRANSITION_DURATION,
    }
}

/// Reset control: back to the identity transform, animated.
#[must_use]
pub fn reset() -> ZoomCommand {
    ZoomCommand {
        target: ZoomTransform::IDENTITY,
        duration: TRANSITION_DURATION,
    }
}
