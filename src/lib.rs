//! # geoticks
//!
//! Coordinate rulers for slippy maps.
//!
//! The overlay draws latitude ticks along the left edge of a map container
//! and longitude ticks along its bottom edge. Every tick sits on an exact
//! geographic value: the visible range is divided in degrees and each step is
//! projected through the host map, so the rulers stay correct on non-linear
//! projections such as Web Mercator. Major ticks carry a
//! degrees/minutes/seconds label.
//!
//! The host map is abstracted behind [`MapAdapter`]; [`Map`] is a headless
//! Web Mercator implementation used by the demos and tests. Drawing goes
//! through [`DrawSurface`], with recording, SVG and (feature `egui`) egui
//! backends.

pub mod core;
pub mod input;
pub mod logging;
pub mod overlay;
pub mod prelude;
pub mod rendering;
pub mod ticks;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    bounds::ViewportBounds,
    builder::TickConfigBuilder,
    config::{ConfigurationError, EdgeOffsets, TickConfig, TickDensity},
    geo::{LatLng, Point},
    map::Map,
    viewport::Viewport,
};

pub use input::{EventKind, EventManager, MapEvent};

pub use overlay::{OverlayController, RedrawStats};

pub use rendering::{DrawSurface, RecordingSurface, SvgSurface};

#[cfg(feature = "egui")]
pub use rendering::EguiSurface;

pub use ticks::{format_coordinate, format_dms, generate, Axis, DmsAngle, Series};

pub use traits::{MapAdapter, Projection};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GeoTickError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GeoTickError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Projection unavailable: the map is not ready or the overlay is not attached")]
    ProjectionUnavailable,

    #[error("Invalid primitive: {0}")]
    InvalidPrimitive(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = GeoTickError;
