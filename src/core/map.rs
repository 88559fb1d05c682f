use crate::{
    core::{
        bounds::ViewportBounds,
        geo::{LatLng, Point},
        viewport::Viewport,
    },
    input::{EventKind, EventManager, MapEvent},
    traits::{MapAdapter, Projection},
    Result,
};

/// Headless reference map: a Web Mercator viewport plus an event queue.
///
/// Every state change emits a [`MapEvent`]; embedders drain them with
/// [`Map::process_events`] and forward each one to the overlay.
#[derive(Debug)]
pub struct Map {
    viewport: Viewport,
    event_manager: EventManager,
    loaded: bool,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self::with_viewport(Viewport::new(center, zoom, size))
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            event_manager: EventManager::new(),
            loaded: false,
        }
    }

    /// Marks the map as loaded and emits `Ready`. Later calls are no-ops.
    pub fn load(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.event_manager.emit(MapEvent::Ready {
            size: self.viewport.size,
        });
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn set_view(&mut self, center: LatLng, zoom: f64) -> Result<()> {
        if !center.is_valid() {
            return Err(crate::Error::InvalidCoordinates(format!(
                "center out of range: {}, {}",
                center.lat, center.lng
            )));
        }

        let old_center = self.viewport.center;
        let old_zoom = self.viewport.zoom;

        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);

        if self.viewport.center != old_center || self.viewport.zoom != old_zoom {
            self.emit_view_changed();
        }

        Ok(())
    }

    /// Drags the map content by `delta` pixels
    pub fn pan(&mut self, delta: Point) {
        let old_center = self.viewport.center;
        self.viewport.pan(delta);
        if self.viewport.center != old_center {
            self.emit_view_changed();
        }
    }

    pub fn zoom_to(&mut self, zoom: f64, focus_point: Option<Point>) {
        let old_zoom = self.viewport.zoom;
        self.viewport.zoom_to(zoom, focus_point);
        if self.viewport.zoom != old_zoom {
            self.emit_view_changed();
        }
    }

    pub fn resize(&mut self, size: Point) {
        if self.viewport.size == size {
            return;
        }
        self.viewport.set_size(size);
        self.event_manager.emit(MapEvent::Resize { size });
    }

    /// Reports the pointer at `pixel` (container coordinates)
    pub fn mouse_move(&mut self, pixel: Point) {
        let lat_lng = self.viewport.pixel_to_lat_lng(&pixel);
        self.event_manager.emit(MapEvent::MouseMove { lat_lng, pixel });
    }

    pub fn on<F>(&mut self, kind: EventKind, callback: F)
    where
        F: FnMut(&MapEvent) + 'static,
    {
        self.event_manager.on(kind, callback);
    }

    pub fn process_events(&mut self) -> Vec<MapEvent> {
        self.event_manager.process_events()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn emit_view_changed(&mut self) {
        self.event_manager.emit(MapEvent::ViewChanged {
            center: self.viewport.center,
            zoom: self.viewport.zoom,
        });
    }
}

impl Projection for Map {
    fn project(&self, lat_lng: &LatLng) -> Point {
        self.viewport.lat_lng_to_pixel(lat_lng)
    }

    fn unproject(&self, pixel: &Point) -> LatLng {
        self.viewport.pixel_to_lat_lng(pixel)
    }
}

impl MapAdapter for Map {
    fn container_size(&self) -> Point {
        self.viewport.size
    }

    fn is_ready(&self) -> bool {
        self.loaded
    }

    fn viewport_corners(&self) -> ViewportBounds {
        self.viewport.corners()
    }
}
