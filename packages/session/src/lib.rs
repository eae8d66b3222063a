#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The map session context.
//!
//! A [`MapSession`] is built exactly once, after both data sources resolve:
//! the two fetches run concurrently and setup is all-or-nothing. If either
//! fails the error is logged and no session exists. Aggregates and features
//! are held for the life of the session and never recomputed; every
//! interaction after load only re-styles the already-rendered scene.

use incident_map_geography::{GeographyError, export, fetch::fetch_topology, join};
use incident_map_geography_models::GeoFeature;
use incident_map_incident_models::{CountyTotalsMap, StateTotalsMap};
use incident_map_incidents::{IncidentError, aggregate, fetch::fetch_incidents};
use incident_map_interaction::{InteractionState, UiEvent, ZoomCommand, dispatch, year};
use incident_map_render::{MarkerKind, PlanarProjection, Scene, reconcile};
use thiserror::Error;

pub use incident_map_geography_models::FeatureKind;

/// Errors that can occur while building a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Boundary data failed to load.
    #[error("Geography error: {0}")]
    Geography(#[from] GeographyError),

    /// Incident data failed to load.
    #[error("Incident error: {0}")]
    Incident(#[from] IncidentError),
}

/// Where the two data sources live and how large the viewport is.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Topology document URL or path.
    pub topology_source: String,
    /// Incident table URL or path.
    pub incidents_source: String,
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
}

impl SessionConfig {
    /// Default viewport size.
    pub const DEFAULT_VIEWPORT: (f64, f64) = (960.0, 600.0);

    /// Creates a config with the default viewport.
    #[must_use]
    pub const fn new(topology_source: String, incidents_source: String) -> Self {
        Self {
            topology_source,
            incidents_source,
            width: Self::DEFAULT_VIEWPORT.0,
            height: Self::DEFAULT_VIEWPORT.1,
        }
    }
}

/// Everything the map holds after load.
#[derive(Debug)]
pub struct MapSession {
    /// Per-county victim totals.
    pub county_totals: CountyTotalsMap,
    /// Per-state victim totals.
    pub state_totals: StateTotalsMap,
    /// Boundary features, counties first then states, with victim totals
    /// attached to matching counties.
    pub features: Vec<GeoFeature>,
    /// The rendered shape set.
    pub scene: Scene,
    /// Zoom transform, label row, year readout, marker filter.
    pub state: InteractionState,
}

impl MapSession {
    /// Loads both data sources concurrently and builds the session.
    ///
    /// All-or-nothing: aggregation, joining, and the initial render only
    /// happen once both fetches succeed. The year filter runs once with
    /// the slider's initial value (the "all years" sentinel), matching
    /// setup-time behavior.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if either fetch fails; the failure is also
    /// logged. No retries, no partial render.
    pub async fn load(config: &SessionConfig) -> Result<Self, SessionError> {
        let client = reqwest::Client::new();

        let topology_load = async {
            fetch_topology(&client, &config.topology_source)
                .await
                .map_err(SessionError::from)
        };
        let incidents_load = async {
            fetch_incidents(&client, &config.incidents_source)
                .await
                .map_err(SessionError::from)
        };

        let (topology, records) = match tokio::try_join!(topology_load, incidents_load) {
            Ok(loaded) => loaded,
            Err(error) => {
                log::error!("Error loading data: {error}");
                return Err(error);
            }
        };

        let county_totals = aggregate::aggregate_by_county(&records);
        let state_totals = aggregate::aggregate_by_state(&records);

        let mut features = match topology.features() {
            Ok(features) => features,
            Err(error) => {
                log::error!("Error loading data: {error}");
                return Err(error.into());
            }
        };
        join::attach_victim_totals(&mut features, &county_totals);

        let projection = PlanarProjection::fit(config.width, config.height, &features);

        let mut scene = Scene::default();
        reconcile(&mut scene, &features, &projection);

        let mut state = InteractionState::default();
        dispatch(
            &mut scene,
            &mut state,
            UiEvent::YearSelected(year::ALL_YEARS_SENTINEL),
        );

        log::info!(
            "Session ready: {} features, {} counties with incidents, {} states with incidents",
            features.len(),
            county_totals.len(),
            state_totals.len()
        );

        Ok(Self {
            county_totals,
            state_totals,
            features,
            scene,
            state,
        })
    }

    /// Feeds one UI event through the dispatcher.
    ///
    /// Returns the [`ZoomCommand`] when the event produced an animated
    /// zoom.
    pub fn handle(&mut self, event: UiEvent) -> Option<ZoomCommand> {
        dispatch(&mut self.scene, &mut self.state, event)
    }

    /// County names present both in the topology and in the aggregates.
    #[must_use]
    pub fn common_counties(&self) -> Vec<&str> {
        join::common_counties(&self.features, &self.county_totals)
    }

    /// Names of the currently visible shapes, in render order.
    #[must_use]
    pub fn visible_shape_names(&self) -> Vec<&str> {
        self.scene
            .visible_shapes()
            .map(|shape| shape.name.as_str())
            .collect()
    }

    /// `(visible circles, visible triangles)`.
    #[must_use]
    pub fn visible_marker_counts(&self) -> (usize, usize) {
        (
            self.scene.visible_markers(MarkerKind::Circle).count(),
            self.scene.visible_markers(MarkerKind::Triangle).count(),
        )
    }

    /// The county features as a `GeoJSON` feature collection, victim
    /// totals attached.
    #[must_use]
    pub fn county_feature_collection(&self) -> geojson::FeatureCollection {
        let counties: Vec<GeoFeature> = self
            .features
            .iter()
            .filter(|f| f.kind == FeatureKind::County)
            .cloned()
            .collect();

        export::to_feature_collection(&counties)
    }
}
