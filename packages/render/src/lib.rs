#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map scene model.
//!
//! Binds boundary features to drawable shapes and victim totals to marker
//! shapes. Coordinate transforms are delegated to a [`Projection`]
//! implementation; this crate only builds path data and keeps the scene's
//! visual state (classes, display, transform) for the interaction layer to
//! mutate.
//!
//! [`Projection`]: projection::Projection

pub mod path;
pub mod projection;
pub mod scene;

pub use projection::{PlanarProjection, Projection};
pub use scene::{
    CIRCLE_OFFSET_Y, MARKER_RADIUS, Marker, MarkerKind, MarkerShape, NEUTRAL_FILL, Scene, Shape,
    TRIANGLE_HALF_WIDTH, reconcile,
};
