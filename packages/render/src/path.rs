//! Path data generation.
//!
//! Turns projected feature rings into SVG-style path data and computes the
//! planar centroid of the projected shape for marker placement.

use geo::{Centroid, Coord, LineString, MultiPolygon, Polygon};
use incident_map_geography_models::GeoFeature;

use crate::projection::Projection;

/// Builds SVG-style path data (`M`/`L`/`Z` per ring) for a feature's
/// projected exterior rings.
///
/// Positions the projection clips are dropped from their ring; returns
/// `None` when nothing projects at all.
#[must_use]
pub fn path_data(feature: &GeoFeature, projection: &dyn Projection) -> Option<String> {
    let mut data = String::new();

    for ring in &feature.polygons {
        let projected: Vec<[f64; 2]> = ring
            .iter()
            .filter_map(|&position| projection.project(position))
            .collect();

        let Some((&first, rest)) = projected.split_first() else {
            continue;
        };

        data.push_str(&format!("M {} {}", first[0], first[1]));
        for &[x, y] in rest {
            data.push_str(&format!(" L {x} {y}"));
        }
        data.push_str(" Z");
    }

    (!data.is_empty()).then_some(data)
}

/// Computes the planar centroid of a feature's projected shape, the anchor
/// point for its victim markers.
#[must_use]
pub fn projected_centroid(feature: &GeoFeature, projection: &dyn Projection) -> Option<[f64; 2]> {
    let polygons: Vec<Polygon> = feature
        .polygons
        .iter()
        .filter_map(|ring| {
            let coords: Vec<Coord> = ring
                .iter()
                .filter_map(|&position| projection.project(position))
                .map(|[x, y]| Coord { x, y })
                .collect();

            (coords.len() >= 3).then(|| Polygon::new(LineString::new(coords), vec![]))
        })
        .collect();

    let centroid = MultiPolygon::new(polygons).centroid()?;
    Some([centroid.x(), centroid.y()])
}

/// Builds the triangular injury-marker path: an equilateral triangle of
/// half-width `size` centered on `[x, y]`, apex down.
#[must_use]
pub fn triangle_path(center: [f64; 2], size: f64) -> String {
    let [x, y] = center;
    format!(
        "M {} {} L {} {} L {} {} Z",
        x,
        y + size,
        x - size,
        y - size,
        x + size,
        y - size
    )
}

#[cfg(test)]
mod tests {
    use incident_map_geography_models::{FeatureKind, FeatureProperties};

    use super::*;

    /// Projection that hands coordinates through unchanged.
    struct Identity;

    impl Projection for Identity {
        fn project(&self, position: [f64; 2]) -> Option<[f64; 2]> {
            Some(position)
        }
    }

    /// Projection that clips everything.
    struct ClipsAll;

    impl Projection for ClipsAll {
        fn project(&self, _position: [f64; 2]) -> Option<[f64; 2]> {
            None
        }
    }

    fn unit_square(name: &str) -> GeoFeature {
        GeoFeature {
            kind: FeatureKind::County,
            properties: FeatureProperties::named(name.to_owned()),
            polygons: vec![vec![
                [0.0, 0.0],
                [4.0, 0.0],
                [4.0, 4.0],
                [0.0, 4.0],
                [0.0, 0.0],
            ]],
        }
    }

    #[test]
    fn path_data_is_one_subpath_per_ring() {
        let mut feature = unit_square("Square");
        feature
            .polygons
            .push(vec![[10.0, 10.0], [11.0, 10.0], [10.0, 11.0], [10.0, 10.0]]);

        let data = path_data(&feature, &Identity).unwrap();
        assert_eq!(data.matches('M').count(), 2);
        assert_eq!(data.matches('Z').count(), 2);
        assert!(data.starts_with("M 0 0 L 4 0"));
    }

    #[test]
    fn fully_clipped_feature_has_no_path() {
        assert_eq!(path_data(&unit_square("Square"), &ClipsAll), None);
    }

    #[test]
    fn centroid_of_square_is_its_center() {
        let centroid = projected_centroid(&unit_square("Square"), &Identity).unwrap();
        assert!((centroid[0] - 2.0).abs() < 1e-9);
        assert!((centroid[1] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn centroid_is_area_weighted_across_polygons() {
        let mut feature = unit_square("Square");
        // A sliver far away must barely move the centroid.
        feature.polygons.push(vec![
            [100.0, 100.0],
            [100.1, 100.0],
            [100.1, 100.1],
            [100.0, 100.1],
            [100.0, 100.0],
        ]);

        let centroid = projected_centroid(&feature, &Identity).unwrap();
        assert!(centroid[0] < 3.0, "centroid dragged too far: {centroid:?}");
    }

    #[test]
    fn triangle_path_matches_marker_contract() {
        assert_eq!(
            triangle_path([10.0, 20.0], 3.0),
            "M 10 23 L 7 17 L 13 17 Z"
        );
    }
}
