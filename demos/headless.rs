//! Renders the rulers of a reference map to SVG on stdout.
//!
//! ```text
//! cargo run --example headless -- [config.json] > ticks.svg
//! ```

use geoticks::prelude::*;

fn main() -> anyhow::Result<()> {
    let _ = geoticks::logging::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => TickConfig::from_json_file(path)?,
        None => TickConfig::default(),
    };

    let mut map = Map::new(LatLng::new(46.2044, 6.1432), 9.0, Point::new(800.0, 600.0));
    let mut overlay = OverlayController::new(config, SvgSurface::new());

    map.load();
    map.pan(Point::new(-120.0, 40.0));
    for event in map.process_events() {
        overlay.handle_event(&event, &map)?;
    }

    if let Some(stats) = overlay.last_redraw() {
        log::info!("{} ticks, {} labels", stats.ticks, stats.labels);
    }
    print!("{}", overlay.surface().to_svg_string());
    Ok(())
}
