//! Prelude module for common geoticks types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use geoticks::prelude::*;`

pub use crate::core::{
    bounds::ViewportBounds,
    builder::TickConfigBuilder,
    config::{ConfigurationError, EdgeOffsets, TickConfig, TickDensity},
    geo::{LatLng, Point},
    map::Map,
    viewport::Viewport,
};

pub use crate::input::{EventKind, MapEvent};

pub use crate::overlay::{OverlayController, RedrawStats};

pub use crate::rendering::{DrawSurface, RecordingSurface, SvgSurface};

#[cfg(feature = "egui")]
pub use crate::rendering::EguiSurface;

pub use crate::ticks::{format_coordinate, format_dms, generate, Axis, Series};

pub use crate::traits::{MapAdapter, Projection};

pub use crate::{GeoTickError, Result};
