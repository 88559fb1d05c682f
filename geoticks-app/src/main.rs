use geoticks::prelude::*;

/// Standalone viewer showing the coordinate rulers over a pannable map
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("geoticks - coordinate rulers"),
        ..Default::default()
    };

    eframe::run_native(
        "geoticks-app",
        options,
        Box::new(|cc| Box::new(GeoticksApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Density {
    Fine,
    Standard,
    Coarse,
}

impl Density {
    fn preset(self) -> TickDensity {
        match self {
            Density::Fine => TickDensity::Fine,
            Density::Standard => TickDensity::Standard,
            Density::Coarse => TickDensity::Coarse,
        }
    }
}

/// The main application struct
struct GeoticksApp {
    map: Map,
    overlay: OverlayController<EguiSurface>,
    density: Density,
    hemisphere_labels: bool,
    cursor: Option<LatLng>,
    show_debug_panel: bool,
}

impl GeoticksApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let map = Map::new(LatLng::new(46.2044, 6.1432), 8.0, Point::new(1200.0, 800.0));

        Self {
            map,
            overlay: OverlayController::new(
                TickConfig::default(),
                EguiSurface::new(egui::Color32::BLACK),
            ),
            density: Density::Fine,
            hemisphere_labels: true,
            cursor: None,
            show_debug_panel: true,
        }
    }

    /// Rebuilds the overlay after a settings change and attaches it right away
    fn rebuild_overlay(&mut self) {
        let base = self.density.preset().resolve();
        let config = TickConfig::builder()
            .with_steps(base.minor_count(), base.major_divider())
            .with_hemisphere_labels(self.hemisphere_labels)
            .build();

        match config {
            Ok(config) => {
                let surface = EguiSurface::new(egui::Color32::BLACK);
                self.overlay = OverlayController::new(config, surface);
                if self.map.is_loaded() {
                    let ready = MapEvent::Ready {
                        size: self.map.container_size(),
                    };
                    if let Err(e) = self.overlay.handle_event(&ready, &self.map) {
                        log::warn!("overlay rebuild failed: {e}");
                    }
                }
            }
            Err(e) => log::warn!("rejected configuration: {e}"),
        }
    }

    fn location_presets(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Quick locations:");

            let presets = [
                ("Geneva", LatLng::new(46.2044, 6.1432), 8.0),
                ("Greenwich", LatLng::new(51.4779, 0.0), 10.0),
                ("Quito", LatLng::new(-0.1807, -78.4678), 9.0),
                ("Sydney", LatLng::new(-33.8688, 151.2093), 7.0),
            ];

            for (name, center, zoom) in presets {
                if ui.button(name).clicked() {
                    if let Err(e) = self.map.set_view(center, zoom) {
                        log::warn!("cannot move to {name}: {e}");
                    }
                }
            }
        });
    }

    fn settings(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("Density:");
            changed |= ui.radio_value(&mut self.density, Density::Fine, "Fine").changed();
            changed |= ui
                .radio_value(&mut self.density, Density::Standard, "Standard")
                .changed();
            changed |= ui.radio_value(&mut self.density, Density::Coarse, "Coarse").changed();
            ui.separator();
            changed |= ui
                .checkbox(&mut self.hemisphere_labels, "N/S/E/W prefixes")
                .changed();
        });

        if changed {
            self.rebuild_overlay();
        }
    }

    fn map_view(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;

        self.map.resize(Point::new(rect.width() as f64, rect.height() as f64));
        self.map.load();

        if response.dragged() {
            let delta = response.drag_delta();
            self.map.pan(Point::new(delta.x as f64, delta.y as f64));
        }

        if let Some(pos) = response.hover_pos() {
            let scroll = ui.input(|i| i.scroll_delta.y);
            let local = Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
            if scroll != 0.0 {
                let zoom = self.map.viewport().zoom + (scroll as f64 / 120.0);
                self.map.zoom_to(zoom, Some(local));
            }
            self.map.mouse_move(local);
            self.cursor = Some(self.map.unproject(&local));
        } else {
            self.cursor = None;
        }

        for event in self.map.process_events() {
            if let Err(e) = self.overlay.handle_event(&event, &self.map) {
                log::warn!("overlay failed on {:?}: {e}", event.kind());
            }
        }

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(230, 230, 230));
        self.overlay.surface().paint(&painter, rect.min);
    }
}

impl eframe::App for GeoticksApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug_panel, "Debug Panel");
                });

                ui.separator();
                self.location_presets(ui);
            });
            self.settings(ui);
        });

        if self.show_debug_panel {
            egui::SidePanel::right("debug_panel").show(ctx, |ui| {
                ui.heading("Debug Info");
                ui.separator();

                let viewport = self.map.viewport();
                ui.label(format!("Zoom: {:.2}", viewport.zoom));
                ui.label(format!(
                    "Center: {}",
                    format_dms(viewport.center.lat, Some(Axis::Latitude))
                ));
                ui.label(format!(
                    "        {}",
                    format_dms(viewport.center.lng, Some(Axis::Longitude))
                ));

                if let Some(cursor) = self.cursor {
                    ui.separator();
                    ui.label(format!("Cursor: {}", format_dms(cursor.lat, Some(Axis::Latitude))));
                    ui.label(format!("        {}", format_dms(cursor.lng, Some(Axis::Longitude))));
                }

                ui.separator();
                ui.heading("Overlay");
                if let Some(stats) = self.overlay.last_redraw() {
                    ui.label(format!("Ticks: {}", stats.ticks));
                    ui.label(format!("Labels: {}", stats.labels));
                }
                ui.label(format!(
                    "Steps: {} / {}",
                    self.overlay.config().minor_count(),
                    self.overlay.config().major_divider()
                ));
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.map_view(ui);
        });
    }
}
