#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interaction handlers for the rendered map scene.
//!
//! Each handler is a pure function from (current visual state, event
//! payload) to new visual state; [`dispatch`] is the thin layer that routes
//! events to them. Handlers never run concurrently (single-threaded event
//! dispatch) and keep no state beyond what is already on the scene's
//! shapes, the current zoom transform, and the label row.

pub mod markers;
pub mod search;
pub mod year;
pub mod zoom;

use incident_map_render::Scene;

pub use markers::MarkerFilter;
pub use year::LabelRow;
pub use zoom::{ZoomCommand, ZoomTransform};

/// A UI event against the rendered scene.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Year slider input (2013 is the "all years" sentinel).
    YearSelected(u16),
    /// Search button click with the raw input text.
    SearchSubmitted(String),
    /// Zoom gesture yielding a new transform.
    Zoomed(ZoomTransform),
    /// Double-click at a viewport point.
    DoubleClick([f64; 2]),
    /// Reset-button click.
    ZoomReset,
    /// Marker-category button click.
    MarkerFilterSet(MarkerFilter),
}

/// Interaction state alongside the scene: the current zoom transform, the
/// year label row, the year readout text, and the active marker filter.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    /// Current zoom transform.
    pub zoom: ZoomTransform,
    /// Year label row, mirroring the slider.
    pub labels: LabelRow,
    /// Year readout text (the selected slider value).
    pub year_readout: String,
    /// Most recently applied marker filter.
    pub marker_filter: MarkerFilter,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            zoom: ZoomTransform::default(),
            labels: LabelRow::default(),
            year_readout: year::ALL_YEARS_SENTINEL.to_string(),
            marker_filter: MarkerFilter::Both,
        }
    }
}

/// Routes one event to its handler.
///
/// Returns the [`ZoomCommand`] when the event produced an animated zoom,
/// so a host can tween toward the target transform; the scene is already
/// left at the target.
pub fn dispatch(
    scene: &mut Scene,
    state: &mut InteractionState,
    event: UiEvent,
) -> Option<ZoomCommand> {
    log::debug!("Dispatching {event:?}");

    match event {
        UiEvent::YearSelected(year) => {
            year::apply_year_filter(scene, year);
            state.labels.select(year);
            state.year_readout = year.to_string();
            None
        }
        UiEvent::SearchSubmitted(query) => {
            search::apply_search(scene, &query);
            None
        }
        UiEvent::Zoomed(transform) => {
            state.zoom = transform;
            zoom::apply_transform(scene, transform);
            None
        }
        UiEvent::DoubleClick(point) => {
            let command = zoom::double_click(state.zoom, point);
            state.zoom = command.target;
            zoom::apply_transform(scene, command.target);
            Some(command)
        }
        UiEvent::ZoomReset => {
            let command = zoom::reset();
            state.zoom = command.target;
            zoom::apply_transform(scene, command.target);
            Some(command)
        }
        UiEvent::MarkerFilterSet(filter) => {
            state.marker_filter = filter;
            markers::apply_marker_filter(scene, filter);
            None
        }
    }
}
