//! Seams between the tick overlay and its host map
//!
//! The overlay never owns the map. It borrows a [`MapAdapter`] for the
//! duration of each event so any map widget exposing a projection can host
//! the rulers.

use crate::core::{
    bounds::ViewportBounds,
    geo::{LatLng, Point},
};

/// Forward and inverse projection between geographic and container pixel space
pub trait Projection {
    /// Geographic coordinate to container pixel coordinate
    fn project(&self, lat_lng: &LatLng) -> Point;

    /// Container pixel coordinate to geographic coordinate
    fn unproject(&self, pixel: &Point) -> LatLng;
}

/// Capabilities the overlay needs from a host map
pub trait MapAdapter: Projection {
    /// Pixel size of the map container
    fn container_size(&self) -> Point;

    /// Whether the host has finished loading and its projection can be used
    fn is_ready(&self) -> bool;

    /// Geographic coordinates of the four container corners
    fn viewport_corners(&self) -> ViewportBounds {
        ViewportBounds::from_pixel_corners(self.container_size(), |p| self.unproject(p))
    }
}
