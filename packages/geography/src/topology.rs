//! Topology document decoding.
//!
//! The boundary file is a topology document: polygon geometries reference
//! indexes into a shared arc pool instead of carrying their own coordinates.
//! When the document carries a quantization transform, arc positions are
//! delta-encoded integers that scale back to lon/lat degrees.

use incident_map_geography_models::{FeatureKind, FeatureProperties, GeoFeature};
use serde::Deserialize;

use crate::GeographyError;

/// Quantization transform: `position = scale * value + translate`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TopoTransform {
    /// Per-axis scale factors.
    pub scale: [f64; 2],
    /// Per-axis offsets.
    pub translate: [f64; 2],
}

/// A geometry inside one of the named collections.
///
/// Negative arc index `i` references arc `!i` in reversed order, per the
/// topology format.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum TopoGeometry {
    /// A single polygon: one exterior ring followed by any holes.
    Polygon {
        /// Arc index lists, one per ring.
        arcs: Vec<Vec<i64>>,
        /// Feature properties (the name, when present).
        properties: Option<TopoProperties>,
    },
    /// Multiple polygons, each an exterior ring followed by any holes.
    MultiPolygon {
        /// Arc index lists, one list of rings per polygon.
        arcs: Vec<Vec<Vec<i64>>>,
        /// Feature properties (the name, when present).
        properties: Option<TopoProperties>,
    },
}

/// Properties carried by a topology geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct TopoProperties {
    /// Feature name.
    pub name: Option<String>,
}

/// A named collection of geometries.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryCollection {
    /// The geometries in document order.
    pub geometries: Vec<TopoGeometry>,
}

/// The two named collections the map consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct TopoObjects {
    /// County boundary geometries.
    pub counties: GeometryCollection,
    /// State boundary geometries.
    pub states: GeometryCollection,
}

/// A decoded topology document.
#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    /// Quantization transform, present when arcs are delta-encoded.
    pub transform: Option<TopoTransform>,
    /// The shared arc pool.
    pub arcs: Vec<Vec<[f64; 2]>>,
    /// The named geometry collections.
    pub objects: TopoObjects,
}

impl Topology {
    /// Parses a topology document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`GeographyError`] if the text is not valid JSON or does not
    /// contain `counties` and `states` geometry collections.
    pub fn from_json(text: &str) -> Result<Self, GeographyError> {
        let topology: Self = serde_json::from_str(text)?;
        log::debug!(
            "Decoded topology: {} arcs, {} counties, {} states",
            topology.arcs.len(),
            topology.objects.counties.geometries.len(),
            topology.objects.states.geometries.len()
        );
        Ok(topology)
    }

    /// Extracts boundary features: counties first, then states, each in
    /// document order. State outlines must overlay county fills downstream,
    /// so the order is load-bearing.
    ///
    /// Geometries without a name are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GeographyError`] if a geometry references an arc index
    /// outside the arc pool.
    pub fn features(&self) -> Result<Vec<GeoFeature>, GeographyError> {
        let mut features = Vec::new();

        for (kind, collection) in [
            (FeatureKind::County, &self.objects.counties),
            (FeatureKind::State, &self.objects.states),
        ] {
            let mut skipped = 0usize;

            for geometry in &collection.geometries {
                match self.feature_from_geometry(kind, geometry)? {
                    Some(feature) => features.push(feature),
                    None => skipped += 1,
                }
            }

            if skipped > 0 {
                log::warn!("Skipped {skipped} unnamed {kind} geometries");
            }
        }

        Ok(features)
    }

    fn feature_from_geometry(
        &self,
        kind: FeatureKind,
        geometry: &TopoGeometry,
    ) -> Result<Option<GeoFeature>, GeographyError> {
        let (properties, ring_lists): (_, Vec<&Vec<Vec<i64>>>) = match geometry {
            TopoGeometry::Polygon { arcs, properties } => (properties, vec![arcs]),
            TopoGeometry::MultiPolygon { arcs, properties } => (properties, arcs.iter().collect()),
        };

        let Some(name) = properties
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .filter(|n| !n.is_empty())
        else {
            return Ok(None);
        };

        // First ring of each polygon is the exterior; holes are not kept.
        let mut polygons = Vec::new();
        for rings in ring_lists {
            if let Some(exterior) = rings.first() {
                polygons.push(self.assemble_ring(exterior)?);
            }
        }

        Ok(Some(GeoFeature {
            kind,
            properties: FeatureProperties::named(name.to_owned()),
            polygons,
        }))
    }

    /// Concatenates the arcs of one ring, dropping the duplicated joint
    /// point between consecutive arcs and closing the ring.
    fn assemble_ring(&self, arc_indexes: &[i64]) -> Result<Vec<[f64; 2]>, GeographyError> {
        let mut ring: Vec<[f64; 2]> = Vec::new();

        for &index in arc_indexes {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let arc_index = if index < 0 { !index as usize } else { index as usize };

            let arc = self
                .arcs
                .get(arc_index)
                .ok_or_else(|| GeographyError::Conversion {
                    message: format!(
                        "Arc index {index} out of range ({} arcs in pool)",
                        self.arcs.len()
                    ),
                })?;

            let mut positions = self.decode_arc(arc);
            if index < 0 {
                positions.reverse();
            }

            if ring.is_empty() {
                ring.extend(positions);
            } else {
                ring.extend(positions.into_iter().skip(1));
            }
        }

        if ring.first() != ring.last()
            && let Some(&first) = ring.first()
        {
            ring.push(first);
        }

        Ok(ring)
    }

    /// Decodes one arc to absolute lon/lat positions. Quantized arcs are
    /// delta-encoded: each position is the running sum of the integer
    /// deltas, scaled back through the transform.
    fn decode_arc(&self, arc: &[[f64; 2]]) -> Vec<[f64; 2]> {
        self.transform.map_or_else(
            || arc.to_vec(),
            |transform| {
                let mut x = 0.0;
                let mut y = 0.0;
                arc.iter()
                    .map(|&[dx, dy]| {
                        x += dx;
                        y += dy;
                        [
                            x * transform.scale[0] + transform.translate[0],
                            y * transform.scale[1] + transform.translate[1],
                        ]
                    })
                    .collect()
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two adjacent unit squares sharing their middle edge, one county
    /// geometry per square plus a single state spanning both.
    fn two_square_topology() -> Topology {
        let text = r#"{
            "type": "Topology",
            "arcs": [
                [[0.0, 0.0], [0.0, 1.0]],
                [[0.0, 1.0], [-1.0, 1.0], [-1.0, 0.0], [0.0, 0.0]],
                [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
            ],
            "objects": {
                "counties": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Polygon", "arcs": [[0, 1]], "properties": {"name": "West"}},
                        {"type": "Polygon", "arcs": [[-1, 2]], "properties": {"name": "East"}}
                    ]
                },
                "states": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Polygon", "arcs": [[1, 2]], "properties": {"name": "Squareland"}}
                    ]
                }
            }
        }"#;

        Topology::from_json(text).unwrap()
    }

    #[test]
    fn decodes_unquantized_arcs_verbatim() {
        let topology = two_square_topology();
        assert_eq!(topology.decode_arc(&topology.arcs[0]), vec![[0.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn quantized_arcs_accumulate_and_scale() {
        let topology = Topology {
            transform: Some(TopoTransform {
                scale: [0.5, 2.0],
                translate: [10.0, 20.0],
            }),
            arcs: vec![vec![[2.0, 1.0], [2.0, 1.0], [-4.0, 0.0]]],
            objects: two_square_topology().objects,
        };

        assert_eq!(
            topology.decode_arc(&topology.arcs[0]),
            vec![[11.0, 22.0], [12.0, 24.0], [10.0, 24.0]]
        );
    }

    #[test]
    fn features_are_counties_then_states_in_document_order() {
        let features = two_square_topology().features().unwrap();
        let names: Vec<&str> = features.iter().map(|f| f.properties.name.as_str()).collect();
        assert_eq!(names, ["West", "East", "Squareland"]);
        assert_eq!(features[0].kind, FeatureKind::County);
        assert_eq!(features[2].kind, FeatureKind::State);
    }

    #[test]
    fn rings_are_closed_and_joints_deduplicated() {
        let features = two_square_topology().features().unwrap();
        let ring = &features[0].polygons[0];

        assert_eq!(ring.first(), ring.last());
        // 0,0 -> 0,1 from the shared edge, then around the west square.
        assert_eq!(
            ring,
            &vec![[0.0, 0.0], [0.0, 1.0], [-1.0, 1.0], [-1.0, 0.0], [0.0, 0.0]]
        );
    }

    #[test]
    fn negative_indexes_reverse_the_arc() {
        let features = two_square_topology().features().unwrap();
        let east = &features[1].polygons[0];
        assert_eq!(east.first(), Some(&[0.0, 1.0]));
        assert_eq!(east.get(1), Some(&[0.0, 0.0]));
    }

    #[test]
    fn unnamed_geometries_are_skipped() {
        let text = r#"{
            "arcs": [[[0.0, 0.0], [1.0, 1.0], [-1.0, 0.0]]],
            "objects": {
                "counties": {
                    "geometries": [{"type": "Polygon", "arcs": [[0]]}]
                },
                "states": {"geometries": []}
            }
        }"#;

        let features = Topology::from_json(text).unwrap().features().unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn out_of_range_arc_index_is_an_error() {
        let text = r#"{
            "arcs": [],
            "objects": {
                "counties": {
                    "geometries": [
                        {"type": "Polygon", "arcs": [[5]], "properties": {"name": "Nowhere"}}
                    ]
                },
                "states": {"geometries": []}
            }
        }"#;

        let err = Topology::from_json(text).unwrap().features().unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn missing_collections_fail_to_parse() {
        assert!(Topology::from_json(r#"{"arcs": [], "objects": {}}"#).is_err());
    }
}
