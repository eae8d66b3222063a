//! Free-text search.
//!
//! The query is lower-cased, then tried against the state abbreviation
//! table before falling back to a partial county-name match. The table's
//! keys are capitalized names and the lookup is case-sensitive, so the
//! state branch never fires for real input and a full state name falls
//! through to the county path (matching nothing). That is the shipped
//! behavior and it is kept; see DESIGN.md.

use incident_map_geography_models::states::state_abbreviation;
use incident_map_render::Scene;

/// Applies a search query to the scene, hiding every non-matching shape.
///
/// Hidden shapes stay in the scene with `display = false`; nothing is
/// removed.
pub fn apply_search(scene: &mut Scene, query: &str) {
    let lowered = query.to_lowercase();

    if let Some(abbreviation) = state_abbreviation(&lowered) {
        filter_by_state(scene, abbreviation);
    } else {
        filter_by_county(scene, &lowered);
    }
}

/// Shows only shapes whose feature name maps to the given abbreviation.
fn filter_by_state(scene: &mut Scene, abbreviation: &str) {
    for shape in &mut scene.shapes {
        shape.display = state_abbreviation(&shape.name) == Some(abbreviation);
    }
}

/// Shows only shapes whose lower-cased name contains the query.
fn filter_by_county(scene: &mut Scene, lowered_query: &str) {
    for shape in &mut scene.shapes {
        shape.display = shape.name.to_lowercase().contains(lowered_query);
    }
}

#[cfg(test)]
mod tests {
    use incident_map_geography_models::FeatureKind;
    use incident_map_render::{NEUTRAL_FILL, Shape};

    use super::*;

    fn shape(kind: FeatureKind, name: &str) -> Shape {
        Shape {
            kind,
            name: name.to_owned(),
            path: String::new(),
            fill: NEUTRAL_FILL.to_owned(),
            title: name.to_owned(),
            classes: std::collections::BTreeSet::new(),
            display: true,
            transform: None,
        }
    }

    fn scene() -> Scene {
        Scene {
            shapes: vec![
                shape(FeatureKind::County, "Orange"),
                shape(FeatureKind::County, "East Orange"),
                shape(FeatureKind::County, "Dallas"),
                shape(FeatureKind::State, "Texas"),
            ],
            markers: vec![],
        }
    }

    fn visible_names(scene: &Scene) -> Vec<&str> {
        scene
            .visible_shapes()
            .map(|shape| shape.name.as_str())
            .collect()
    }

    #[test]
    fn county_substring_match_is_case_insensitive() {
        let mut scene = scene();
        apply_search(&mut scene, "ORANGE");

        assert_eq!(visible_names(&scene), ["Orange", "East Orange"]);
    }

    #[test]
    fn non_matching_shapes_are_hidden_not_removed() {
        let mut scene = scene();
        apply_search(&mut scene, "dallas");

        assert_eq!(scene.shapes.len(), 4);
        assert_eq!(visible_names(&scene), ["Dallas"]);
    }

    #[test]
    fn full_state_name_falls_through_to_county_path() {
        // "texas" misses the capitalized abbreviation table, so the query
        // is treated as a county substring; only names containing it stay
        // visible. Here that's the "Texas" state shape itself.
        let mut scene = scene();
        apply_search(&mut scene, "Texas");

        assert_eq!(visible_names(&scene), ["Texas"]);
    }

    #[test]
    fn full_state_name_with_no_substring_match_hides_everything() {
        let mut scene = scene();
        apply_search(&mut scene, "Wyoming");

        assert!(visible_names(&scene).is_empty());
    }

    #[test]
    fn empty_query_shows_everything() {
        let mut scene = scene();
        apply_search(&mut scene, "dallas");
        apply_search(&mut scene, "");

        assert_eq!(visible_names(&scene).len(), 4);
    }
}
