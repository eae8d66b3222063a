//! `GeoJSON` export.
//!
//! Converts decoded boundary features (with any attached victim totals)
//! into a standard `GeoJSON` `FeatureCollection` for interop with other
//! tooling.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use incident_map_geography_models::GeoFeature;

/// Converts features into a `GeoJSON` `FeatureCollection`.
///
/// Each feature becomes a `MultiPolygon` of its exterior rings with `name`,
/// `kind`, and any attached `victimsKilled`/`victimsInjured` properties.
#[must_use]
pub fn to_feature_collection(features: &[GeoFeature]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: features.iter().map(to_feature).collect(),
        foreign_members: None,
    }
}

fn to_feature(feature: &GeoFeature) -> Feature {
    let polygons: Vec<Vec<Vec<Vec<f64>>>> = feature
        .polygons
        .iter()
        .map(|ring| vec![ring.iter().map(|position| position.to_vec()).collect()])
        .collect();

    let mut properties = JsonObject::new();
    properties.insert("name".to_owned(), feature.properties.name.clone().into());
    properties.insert("kind".to_owned(), feature.kind.to_string().into());
    if let Some(killed) = feature.properties.victims_killed {
        properties.insert("victimsKilled".to_owned(), killed.into());
    }
    if let Some(injured) = feature.properties.victims_injured {
        properties.insert("victimsInjured".to_owned(), injured.into());
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::MultiPolygon(polygons))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use incident_map_geography_models::{FeatureKind, FeatureProperties};

    use super::*;

    #[test]
    fn exports_names_and_attached_totals() {
        let features = vec![GeoFeature {
            kind: FeatureKind::County,
            properties: FeatureProperties {
                name: "Orange".to_owned(),
                victims_killed: Some(4),
                victims_injured: None,
            },
            polygons: vec![vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]],
        }];

        let collection = to_feature_collection(&features);
        assert_eq!(collection.features.len(), 1);

        let properties = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(properties["name"], "Orange");
        assert_eq!(properties["kind"], "COUNTY");
        assert_eq!(properties["victimsKilled"], 4);
        assert!(!properties.contains_key("victimsInjured"));

        match collection.features[0].geometry.as_ref().map(|g| &g.value) {
            Some(Value::MultiPolygon(polygons)) => {
                assert_eq!(polygons.len(), 1);
                assert_eq!(polygons[0][0].len(), 4);
            }
            other => panic!("expected MultiPolygon, got {other:?}"),
        }
    }
}
