use crate::core::bounds::ViewportBounds;
use crate::core::constants::{EARTH_RADIUS, MAX_LATITUDE, MAX_ZOOM, MIN_ZOOM, TILE_SIZE};
use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The current view of the reference map: center, zoom, and container size.
///
/// Projection is spherical Web Mercator (EPSG:3857). World pixel space is
/// `TILE_SIZE * 2^zoom` pixels wide with the origin at the north-west corner
/// of the world; container space has its origin at the top-left corner of
/// the visible area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the container in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center: Self::clamp_to_world(center),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            size,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Sets the center of the viewport, clamped to the projectable world
    pub fn set_center(&mut self, center: LatLng) {
        self.center = Self::clamp_to_world(center);
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the container size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Sets the zoom limits
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// World width in pixels at the current zoom
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * 2_f64.powf(self.zoom)
    }

    /// Projects a LatLng to world pixel coordinates at the current zoom
    pub fn project(&self, lat_lng: &LatLng) -> Point {
        let meters = LatLng::new(LatLng::clamp_lat(lat_lng.lat), lat_lng.lng).to_mercator();
        let half_circumference = PI * EARTH_RADIUS;
        let scale = self.world_size() / (2.0 * half_circumference);

        Point::new(
            (meters.x + half_circumference) * scale,
            (half_circumference - meters.y) * scale,
        )
    }

    /// Unprojects world pixel coordinates back to LatLng at the current zoom
    pub fn unproject(&self, pixel: &Point) -> LatLng {
        let half_circumference = PI * EARTH_RADIUS;
        let scale = (2.0 * half_circumference) / self.world_size();

        LatLng::from_mercator(Point::new(
            pixel.x * scale - half_circumference,
            half_circumference - pixel.y * scale,
        ))
    }

    /// World pixel position of the container's top-left corner
    pub fn pixel_origin(&self) -> Point {
        self.project(&self.center).subtract(&self.size.multiply(0.5))
    }

    /// Converts a geographical coordinate to container pixel coordinates
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        self.project(lat_lng).subtract(&self.pixel_origin())
    }

    /// Converts container pixel coordinates back to geographical coordinates
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        self.unproject(&pixel.add(&self.pixel_origin()))
    }

    /// Pans the view by a pixel offset; positive `delta` drags the map content
    /// right/down, moving the center left/up. Returns the applied delta.
    pub fn pan(&mut self, delta: Point) -> Point {
        let before = self.project(&self.center);
        let target = before.subtract(&delta);
        self.set_center(self.unproject(&target));
        before.subtract(&self.project(&self.center))
    }

    /// Zooms to a level, keeping `focus` (container pixels) stationary when given
    pub fn zoom_to(&mut self, zoom: f64, focus: Option<Point>) {
        let new_zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        match focus {
            Some(focus) => {
                let focus_lat_lng = self.pixel_to_lat_lng(&focus);
                self.zoom = new_zoom;
                let drifted = self.lat_lng_to_pixel(&focus_lat_lng);
                self.pan(focus.subtract(&drifted));
            }
            None => self.zoom = new_zoom,
        }
    }

    /// Geographic coordinates of the four container corners.
    ///
    /// Corners beyond the edge of the projected world are clamped to it, so
    /// a container larger than the world at low zoom reports the world
    /// bounds instead of longitudes past 180° or latitudes past the
    /// Mercator limit.
    pub fn corners(&self) -> ViewportBounds {
        ViewportBounds::from_pixel_corners(self.size, |p| {
            Self::clamp_to_world(self.pixel_to_lat_lng(p))
        })
    }

    /// Gets the resolution in meters per pixel at the equator
    pub fn resolution(&self) -> f64 {
        2.0 * PI * EARTH_RADIUS / self.world_size()
    }

    fn clamp_to_world(center: LatLng) -> LatLng {
        LatLng::new(
            center.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE),
            center.lng.clamp(-180.0, 180.0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(
            LatLng::new(40.7128, -74.0060),
            10.0,
            Point::new(800.0, 600.0),
        );

        assert_eq!(viewport.zoom, 10.0);
        assert_eq!(viewport.center.lat, 40.7128);
        assert_eq!(viewport.size.x, 800.0);
    }

    #[test]
    fn test_project_world_corners() {
        let viewport = Viewport::new(LatLng::default(), 0.0, Point::new(256.0, 256.0));

        let origin = viewport.project(&LatLng::new(0.0, 0.0));
        assert_relative_eq!(origin.x, 128.0, epsilon = 1e-9);
        assert_relative_eq!(origin.y, 128.0, epsilon = 1e-9);

        let west = viewport.project(&LatLng::new(0.0, -180.0));
        assert_relative_eq!(west.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_coordinate_conversion() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 1.0, Point::new(512.0, 512.0));

        let center = viewport.pixel_to_lat_lng(&Point::new(256.0, 256.0));
        assert_relative_eq!(center.lat, 0.0, epsilon = 1e-9);
        assert_relative_eq!(center.lng, 0.0, epsilon = 1e-9);

        let coord = LatLng::new(12.5, -33.25);
        let back = viewport.pixel_to_lat_lng(&viewport.lat_lng_to_pixel(&coord));
        assert_relative_eq!(back.lat, coord.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, coord.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = Viewport::default();
        viewport.set_zoom_limits(2.0, 15.0);

        viewport.set_zoom(1.0);
        assert_eq!(viewport.zoom, 2.0);

        viewport.set_zoom(20.0);
        assert_eq!(viewport.zoom, 15.0);
    }

    #[test]
    fn test_pan() {
        let mut viewport = Viewport::new(LatLng::new(0.0, 0.0), 3.0, Point::new(512.0, 512.0));

        let applied = viewport.pan(Point::new(100.0, 0.0));
        assert!(viewport.center.lng < 0.0);
        assert_relative_eq!(applied.x, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zoom_keeps_focus_fixed() {
        let mut viewport = Viewport::new(LatLng::new(45.0, 7.0), 6.0, Point::new(800.0, 600.0));
        let focus = Point::new(100.0, 450.0);
        let under_cursor = viewport.pixel_to_lat_lng(&focus);

        viewport.zoom_to(8.0, Some(focus));

        let after = viewport.lat_lng_to_pixel(&under_cursor);
        assert_eq!(viewport.zoom, 8.0);
        assert_relative_eq!(after.x, focus.x, epsilon = 1e-6);
        assert_relative_eq!(after.y, focus.y, epsilon = 1e-6);
    }

    #[test]
    fn test_corners_are_north_up() {
        let viewport = Viewport::new(LatLng::new(51.5, -0.12), 9.0, Point::new(800.0, 600.0));
        let corners = viewport.corners();

        assert!(corners.north_west.lat > corners.south_west.lat);
        assert!(corners.south_east.lng > corners.south_west.lng);
        assert_relative_eq!(corners.north_west.lng, corners.south_west.lng, epsilon = 1e-9);
        assert_relative_eq!(corners.south_west.lat, corners.south_east.lat, epsilon = 1e-9);
    }

    #[test]
    fn test_corners_clamped_when_world_is_smaller_than_container() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0));
        let corners = viewport.corners();

        assert_eq!(corners.lng_range(), (-180.0, 180.0));
        assert_eq!(corners.lat_range(), (-MAX_LATITUDE, MAX_LATITUDE));
        assert_eq!(corners.north_east, LatLng::new(MAX_LATITUDE, 180.0));
    }

    #[test]
    fn test_corners_inside_world_are_untouched() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 3.0, Point::new(800.0, 600.0));
        let corners = viewport.corners();
        let raw = viewport.pixel_to_lat_lng(&Point::new(0.0, 0.0));

        assert_eq!(corners.north_west, raw);
        assert!(corners.south_east.lng < 180.0);
    }
}
