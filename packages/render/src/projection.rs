//! The projection seam.
//!
//! Projection mathematics belongs to whatever implements [`Projection`];
//! the scene only ever asks for projected viewport coordinates. A
//! projection may clip (return `None`), in which case the position simply
//! produces no geometry.

use incident_map_geography_models::GeoFeature;

/// Projects lon/lat degrees into viewport coordinates.
pub trait Projection {
    /// Projects a `[lon, lat]` position. `None` means the position is
    /// outside the projectable domain.
    fn project(&self, position: [f64; 2]) -> Option<[f64; 2]>;
}

/// A linear lon/lat projection fitted to a viewport.
///
/// Scales a geographic bounding box onto `width` x `height` pixels with
/// latitude increasing upward (viewport y grows downward). Not a
/// cartographic projection; enough for tests and terminal use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarProjection {
    width: f64,
    height: f64,
    min: [f64; 2],
    max: [f64; 2],
}

impl PlanarProjection {
    /// Conterminous-US bounding box, west/south to east/north.
    pub const CONUS_BOUNDS: ([f64; 2], [f64; 2]) = ([-125.0, 24.0], [-66.0, 50.0]);

    /// Creates a projection over the conterminous-US bounding box.
    #[must_use]
    pub const fn conus(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            min: Self::CONUS_BOUNDS.0,
            max: Self::CONUS_BOUNDS.1,
        }
    }

    /// Fits the projection to the bounding box of the given features.
    ///
    /// Falls back to the conterminous-US box when the features carry no
    /// positions.
    #[must_use]
    pub fn fit(width: f64, height: f64, features: &[GeoFeature]) -> Self {
        let mut positions = features
            .iter()
            .flat_map(|f| f.polygons.iter())
            .flat_map(|ring| ring.iter());

        let Some(&first) = positions.next() else {
            return Self::conus(width, height);
        };

        let mut min = first;
        let mut max = first;
        for &[x, y] in positions {
            min = [min[0].min(x), min[1].min(y)];
            max = [max[0].max(x), max[1].max(y)];
        }

        Self {
            width,
            height,
            min,
            max,
        }
    }
}

impl Projection for PlanarProjection {
    fn project(&self, position: [f64; 2]) -> Option<[f64; 2]> {
        let span_x = self.max[0] - self.min[0];
        let span_y = self.max[1] - self.min[1];
        if span_x <= 0.0 || span_y <= 0.0 {
            return None;
        }

        let x = (position[0] - self.min[0]) / span_x * self.width;
        let y = (self.max[1] - position[1]) / span_y * self.height;
        Some([x, y])
    }
}

#[cfg(test)]
mod tests {
    use incident_map_geography_models::{FeatureKind, FeatureProperties};

    use super::*;

    #[test]
    fn fitted_bounds_map_to_viewport_corners() {
        let features = vec![GeoFeature {
            kind: FeatureKind::County,
            properties: FeatureProperties::named("Test".to_owned()),
            polygons: vec![vec![[-100.0, 30.0], [-90.0, 40.0], [-100.0, 30.0]]],
        }];

        let projection = PlanarProjection::fit(200.0, 100.0, &features);

        // South-west corner lands bottom-left, north-east corner top-right.
        assert_eq!(projection.project([-100.0, 30.0]), Some([0.0, 100.0]));
        assert_eq!(projection.project([-90.0, 40.0]), Some([200.0, 0.0]));
    }

    #[test]
    fn empty_features_fall_back_to_conus() {
        let projection = PlanarProjection::fit(100.0, 100.0, &[]);
        assert_eq!(projection, PlanarProjection::conus(100.0, 100.0));
    }

    #[test]
    fn degenerate_bounds_project_nothing() {
        let features = vec![GeoFeature {
            kind: FeatureKind::County,
            properties: FeatureProperties::named("Point".to_owned()),
            polygons: vec![vec![[-100.0, 30.0], [-100.0, 30.0]]],
        }];

        let projection = PlanarProjection::fit(100.0, 100.0, &features);
        assert_eq!(projection.project([-100.0, 30.0]), None);
    }
}
