use crate::{
    core::config::TickConfig,
    input::MapEvent,
    rendering::{
        primitives::{DrawCommand, RectPrimitive, TextPrimitive},
        surface::DrawSurface,
    },
    ticks::{format::format_dms, generator::generate, series::Axis, series::Series},
    traits::MapAdapter,
    GeoTickError, Result,
};

/// Counts of what the last redraw put on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RedrawStats {
    pub ticks: usize,
    pub labels: usize,
}

/// Keeps the coordinate rulers of one map in sync with its viewport.
///
/// The controller owns its surface and configuration. The host map is lent
/// for each call, so the same controller works with any [`MapAdapter`].
/// Redraws are full rebuilds: every enabled series is generated first and
/// the surface is only cleared once all of them succeeded.
#[derive(Debug)]
pub struct OverlayController<S: DrawSurface> {
    config: TickConfig,
    surface: S,
    attached: bool,
    last_redraw: Option<RedrawStats>,
}

impl<S: DrawSurface> OverlayController<S> {
    pub fn new(config: TickConfig, surface: S) -> Self {
        Self {
            config,
            surface,
            attached: false,
            last_redraw: None,
        }
    }

    /// Reacts to one map event. Events must be fed in the order the map
    /// emitted them.
    pub fn handle_event(&mut self, event: &MapEvent, map: &dyn MapAdapter) -> Result<()> {
        match event {
            MapEvent::Ready { .. } => {
                self.surface.attach(map.container_size())?;
                self.attached = true;
                log::debug!("overlay attached to {:?} container", map.container_size());
                self.redraw(map)
            }
            MapEvent::ViewChanged { .. } | MapEvent::Resize { .. } => {
                if !self.attached {
                    log::debug!("ignoring {:?} before the map is ready", event.kind());
                    return Ok(());
                }
                if let MapEvent::Resize { size } = event {
                    self.surface.attach(*size)?;
                }
                self.on_viewport_changed(map)
            }
            MapEvent::MouseMove { lat_lng, .. } => {
                log::debug!(
                    "cursor at {} / {}",
                    format_dms(lat_lng.lat, Some(Axis::Latitude)),
                    format_dms(lat_lng.lng, Some(Axis::Longitude))
                );
                Ok(())
            }
        }
    }

    pub fn on_viewport_changed(&mut self, map: &dyn MapAdapter) -> Result<()> {
        self.redraw(map)
    }

    /// Rebuilds the rulers for the map's current viewport.
    ///
    /// Every primitive is generated and validated before the surface is
    /// cleared, so a failed redraw leaves the previous picture and
    /// [`last_redraw`](Self::last_redraw) as they were.
    pub fn redraw(&mut self, map: &dyn MapAdapter) -> Result<()> {
        if !self.attached || !map.is_ready() {
            return Err(GeoTickError::ProjectionUnavailable);
        }

        let bounds = map.viewport_corners();
        let size = map.container_size();
        let series = self
            .config
            .enabled_axes()
            .map(|axis| generate(axis, &bounds, size, &self.config, map))
            .collect::<Result<Vec<Series>>>()?;

        let mut commands = Vec::new();
        let mut stats = RedrawStats::default();
        for entry in series.into_iter().flatten() {
            let rect = RectPrimitive::from(&entry.tick);
            rect.validate().map_err(|err| {
                log::warn!("tick {} rejected: {}", entry.index, err);
                err
            })?;
            commands.push(DrawCommand::Rect(rect));
            stats.ticks += 1;

            if let Some(label) = entry.label {
                let text = TextPrimitive::from(label);
                text.validate().map_err(|err| {
                    log::warn!("label {} rejected: {}", entry.index, err);
                    err
                })?;
                commands.push(DrawCommand::Text(text));
                stats.labels += 1;
            }
        }

        // all primitives are valid from here on
        self.surface.clear();
        for command in commands {
            match command {
                DrawCommand::Rect(rect) => self.surface.draw_rect(rect)?,
                DrawCommand::Text(text) => self.surface.draw_text(text)?,
            }
        }

        log::debug!(
            "overlay redrawn: {} ticks, {} labels",
            stats.ticks,
            stats.labels
        );
        self.last_redraw = Some(stats);
        Ok(())
    }

    pub fn config(&self) -> &TickConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn last_redraw(&self) -> Option<RedrawStats> {
        self.last_redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        geo::{LatLng, Point},
        map::Map,
    };
    use crate::rendering::surface::RecordingSurface;
    use crate::traits::Projection;

    fn loaded_map() -> Map {
        let mut map = Map::new(LatLng::new(0.0, 0.0), 6.0, Point::new(800.0, 600.0));
        map.load();
        map
    }

    #[test]
    fn test_ready_attaches_and_draws() {
        let mut map = loaded_map();
        let mut overlay = OverlayController::new(TickConfig::default(), RecordingSurface::new());

        for event in map.process_events() {
            overlay.handle_event(&event, &map).unwrap();
        }

        assert!(overlay.is_attached());
        assert_eq!(overlay.surface().attach_count(), 1);
        assert_eq!(overlay.surface().size(), Some(Point::new(800.0, 600.0)));
        assert_eq!(
            overlay.last_redraw(),
            Some(RedrawStats {
                ticks: 202,
                labels: 20
            })
        );
        assert_eq!(overlay.surface().rects().count(), 202);
        assert_eq!(overlay.surface().texts().count(), 20);
    }

    #[test]
    fn test_redraw_before_ready_fails() {
        let map = Map::new(LatLng::new(0.0, 0.0), 3.0, Point::new(400.0, 300.0));
        let mut overlay = OverlayController::new(TickConfig::default(), RecordingSurface::new());

        assert!(matches!(
            overlay.redraw(&map),
            Err(GeoTickError::ProjectionUnavailable)
        ));
        assert!(overlay.surface().is_empty());
        assert!(overlay.last_redraw().is_none());
    }

    #[test]
    fn test_view_change_before_ready_is_ignored() {
        let map = Map::new(LatLng::new(0.0, 0.0), 3.0, Point::new(400.0, 300.0));
        let mut overlay = OverlayController::new(TickConfig::default(), RecordingSurface::new());
        let event = MapEvent::ViewChanged {
            center: LatLng::new(1.0, 1.0),
            zoom: 4.0,
        };

        overlay.handle_event(&event, &map).unwrap();
        assert!(!overlay.is_attached());
        assert_eq!(overlay.surface().clear_count(), 0);
    }

    #[test]
    fn test_each_view_change_rebuilds() {
        let mut map = loaded_map();
        let mut overlay = OverlayController::new(TickConfig::default(), RecordingSurface::new());
        for event in map.process_events() {
            overlay.handle_event(&event, &map).unwrap();
        }

        map.pan(Point::new(30.0, 0.0));
        map.zoom_to(7.0, None);
        for event in map.process_events() {
            overlay.handle_event(&event, &map).unwrap();
        }

        assert_eq!(overlay.surface().clear_count(), 3);
        assert_eq!(overlay.surface().rects().count(), 202);
    }

    #[test]
    fn test_single_axis() {
        let mut map = loaded_map();
        let config = TickConfig::builder()
            .with_steps(20, 4)
            .with_latitude(false)
            .build()
            .unwrap();
        let mut overlay = OverlayController::new(config, RecordingSurface::new());
        for event in map.process_events() {
            overlay.handle_event(&event, &map).unwrap();
        }

        let stats = overlay.last_redraw().unwrap();
        assert_eq!(stats.ticks, 21);
        assert_eq!(stats.labels, 4);
        assert!(overlay.surface().texts().all(|t| t.rotation_deg == -45.0));
    }

    /// Unit-square host whose projection breaks east of 0.5°
    struct BrokenEast;

    impl Projection for BrokenEast {
        fn project(&self, lat_lng: &LatLng) -> Point {
            let x = if lat_lng.lng > 0.5 {
                f64::NAN
            } else {
                lat_lng.lng * 800.0
            };
            Point::new(x, (1.0 - lat_lng.lat) * 600.0)
        }

        fn unproject(&self, pixel: &Point) -> LatLng {
            LatLng::new(1.0 - pixel.y / 600.0, pixel.x / 800.0)
        }
    }

    impl MapAdapter for BrokenEast {
        fn container_size(&self) -> Point {
            Point::new(800.0, 600.0)
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_rejected_primitive_keeps_previous_picture() {
        let mut map = loaded_map();
        let mut overlay = OverlayController::new(TickConfig::default(), RecordingSurface::new());
        for event in map.process_events() {
            overlay.handle_event(&event, &map).unwrap();
        }
        let before = overlay.surface().commands().to_vec();
        let stats = overlay.last_redraw();

        let err = overlay.redraw(&BrokenEast).unwrap_err();

        assert!(matches!(err, GeoTickError::InvalidPrimitive(_)));
        assert_eq!(overlay.surface().commands(), before.as_slice());
        assert_eq!(overlay.surface().clear_count(), 1);
        assert_eq!(overlay.last_redraw(), stats);
    }

    #[test]
    fn test_resize_reattaches() {
        let mut map = loaded_map();
        let mut overlay = OverlayController::new(TickConfig::default(), RecordingSurface::new());
        map.resize(Point::new(1024.0, 768.0));
        for event in map.process_events() {
            overlay.handle_event(&event, &map).unwrap();
        }

        assert_eq!(overlay.surface().attach_count(), 2);
        assert_eq!(overlay.surface().size(), Some(Point::new(1024.0, 768.0)));
        assert_eq!(overlay.surface().clear_count(), 2);
    }

    #[test]
    fn test_mouse_move_draws_nothing() {
        let mut map = loaded_map();
        let mut overlay = OverlayController::new(TickConfig::default(), RecordingSurface::new());
        map.mouse_move(Point::new(10.0, 10.0));
        for event in map.process_events() {
            overlay.handle_event(&event, &map).unwrap();
        }
        let commands = overlay.surface().commands().len();

        map.mouse_move(Point::new(20.0, 20.0));
        for event in map.process_events() {
            overlay.handle_event(&event, &map).unwrap();
        }
        assert_eq!(overlay.surface().commands().len(), commands);
        assert_eq!(overlay.surface().clear_count(), 1);
    }
}
