//! Tick series generation and coordinate label formatting.
//!
//! Everything here is pure: no surface, no host map state beyond a
//! [`Projection`](crate::traits::Projection) borrowed for the call.

pub mod format;
pub mod generator;
pub mod series;

pub use format::{format_coordinate, format_dms, DmsAngle};
pub use generator::generate;
pub use series::{Axis, LabelDescriptor, Series, SeriesEntry, TickDescriptor};
