use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// Geographic coordinates of the four corners of the visible map area.
///
/// Corners are kept individually rather than as a south-west/north-east pair
/// because a rotated or non-linear projection does not map the pixel rectangle
/// onto an axis-aligned geographic box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub north_west: LatLng,
    pub north_east: LatLng,
    pub south_west: LatLng,
    pub south_east: LatLng,
}

impl ViewportBounds {
    pub fn new(
        north_west: LatLng,
        north_east: LatLng,
        south_west: LatLng,
        south_east: LatLng,
    ) -> Self {
        Self {
            north_west,
            north_east,
            south_west,
            south_east,
        }
    }

    /// Builds bounds for an axis-aligned box given as south, west, north, east.
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(
            LatLng::new(north, west),
            LatLng::new(north, east),
            LatLng::new(south, west),
            LatLng::new(south, east),
        )
    }

    /// Unprojects the four pixel corners of a `size.x` by `size.y` container.
    pub fn from_pixel_corners<F>(size: Point, unproject: F) -> Self
    where
        F: Fn(&Point) -> LatLng,
    {
        Self::new(
            unproject(&Point::new(0.0, 0.0)),
            unproject(&Point::new(size.x, 0.0)),
            unproject(&Point::new(0.0, size.y)),
            unproject(&Point::new(size.x, size.y)),
        )
    }

    /// Latitude range along the left edge, bottom to top.
    pub fn lat_range(&self) -> (f64, f64) {
        (self.south_west.lat, self.north_west.lat)
    }

    /// Longitude range along the bottom edge, left to right.
    pub fn lng_range(&self) -> (f64, f64) {
        (self.south_west.lng, self.south_east.lng)
    }

    /// Gets the center point of the four corners
    pub fn center(&self) -> LatLng {
        let corners = [self.north_west, self.north_east, self.south_west, self.south_east];
        let (lat, lng) = corners
            .iter()
            .fold((0.0, 0.0), |(lat, lng), c| (lat + c.lat, lng + c.lng));
        LatLng::new(lat / 4.0, lng / 4.0)
    }

    /// True when either ruler would collapse onto a single coordinate.
    pub fn is_degenerate(&self) -> bool {
        let (south, north) = self.lat_range();
        let (west, east) = self.lng_range();
        south == north || west == east
    }
}
