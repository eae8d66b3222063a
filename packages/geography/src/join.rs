//! Geo/data joining.
//!
//! Matches boundary feature names against aggregated incident keys. Keys on
//! both sides are the exact source spellings; no normalization happens here.

use incident_map_geography_models::{FeatureKind, GeoFeature};
use incident_map_incident_models::CountyTotalsMap;

/// Returns the county feature names that also appear as aggregate keys, in
/// topology order.
///
/// A pure set-intersection query: nothing downstream of the render path
/// consumes it, but the summary view reports the overlap.
#[must_use]
pub fn common_counties<'a>(
    features: &'a [GeoFeature],
    totals: &CountyTotalsMap,
) -> Vec<&'a str> {
    features
        .iter()
        .filter(|feature| feature.kind == FeatureKind::County)
        .map(|feature| feature.properties.name.as_str())
        .filter(|name| totals.contains_key(*name))
        .collect()
}

/// Attaches aggregated victim totals onto matching county features.
///
/// The explicit form of the data-preparation step the renderer relies on:
/// county features found in the aggregates get their `victims_killed`/
/// `victims_injured` properties filled; state features and unmatched
/// counties are left untouched (and will render no markers).
pub fn attach_victim_totals(features: &mut [GeoFeature], totals: &CountyTotalsMap) {
    let mut attached = 0usize;

    for feature in features
        .iter_mut()
        .filter(|f| f.kind == FeatureKind::County)
    {
        if let Some(county_totals) = totals.get(&feature.properties.name) {
            feature.properties.victims_killed = Some(county_totals.killed);
            feature.properties.victims_injured = Some(county_totals.injured);
            attached += 1;
        }
    }

    log::debug!(
        "Attached victim totals to {attached}/{} county features",
        features
            .iter()
            .filter(|f| f.kind == FeatureKind::County)
            .count()
    );
}

#[cfg(test)]
mod tests {
    use incident_map_geography_models::FeatureProperties;
    use incident_map_incident_models::VictimTotals;

    use super::*;

    fn feature(kind: FeatureKind, name: &str) -> GeoFeature {
        GeoFeature {
            kind,
            properties: FeatureProperties::named(name.to_owned()),
            polygons: vec![],
        }
    }

    fn totals(entries: &[(&str, u64, u64)]) -> CountyTotalsMap {
        entries
            .iter()
            .map(|&(name, killed, injured)| (name.to_owned(), VictimTotals { killed, injured }))
            .collect()
    }

    #[test]
    fn intersection_preserves_topology_order() {
        let features = vec![
            feature(FeatureKind::County, "Orange"),
            feature(FeatureKind::County, "Dallas"),
            feature(FeatureKind::County, "Lake"),
        ];
        let totals = totals(&[("Lake", 1, 0), ("Orange", 2, 3)]);

        assert_eq!(common_counties(&features, &totals), ["Orange", "Lake"]);
    }

    #[test]
    fn states_never_join() {
        let features = vec![feature(FeatureKind::State, "Texas")];
        let totals = totals(&[("Texas", 5, 5)]);

        assert!(common_counties(&features, &totals).is_empty());
    }

    #[test]
    fn attach_fills_matching_counties_only() {
        let mut features = vec![
            feature(FeatureKind::County, "Orange"),
            feature(FeatureKind::County, "Dallas"),
            feature(FeatureKind::State, "Orange"),
        ];
        let totals = totals(&[("Orange", 2, 3)]);

        attach_victim_totals(&mut features, &totals);

        assert_eq!(features[0].properties.victims_killed, Some(2));
        assert_eq!(features[0].properties.victims_injured, Some(3));
        assert_eq!(features[1].properties.victims_killed, None);
        assert_eq!(features[2].properties.victims_killed, None);
    }
}
