use approx::assert_relative_eq;
use geoticks::prelude::*;
use proptest::prelude::*;

/// Host whose container shows exactly one degree by one degree, north up,
/// with (lat 0, lng 0) in the bottom-left corner.
struct UnitSquare {
    size: Point,
}

impl Projection for UnitSquare {
    fn project(&self, lat_lng: &LatLng) -> Point {
        Point::new(lat_lng.lng * self.size.x, (1.0 - lat_lng.lat) * self.size.y)
    }

    fn unproject(&self, pixel: &Point) -> LatLng {
        LatLng::new(1.0 - pixel.y / self.size.y, pixel.x / self.size.x)
    }
}

impl MapAdapter for UnitSquare {
    fn container_size(&self) -> Point {
        self.size
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[test]
fn test_fifty_steps_over_one_degree() {
    let host = UnitSquare {
        size: Point::new(800.0, 600.0),
    };
    let config = TickConfig::builder().with_steps(50, 10).build().unwrap();
    let corners = host.viewport_corners();

    for axis in [Axis::Latitude, Axis::Longitude] {
        let series = generate(axis, &corners, host.container_size(), &config, &host).unwrap();
        assert_eq!(series.len(), 51);

        let majors: Vec<usize> = series.majors().map(|e| e.index).collect();
        assert_eq!(majors, (0..=50).step_by(5).collect::<Vec<_>>());

        let labelled: Vec<usize> = series
            .iter()
            .filter(|e| e.label.is_some())
            .map(|e| e.index)
            .collect();
        assert_eq!(labelled, (5..=50).step_by(5).collect::<Vec<_>>());
        for index in [10, 20, 30, 40, 50] {
            assert!(labelled.contains(&index));
        }
        assert!(series.get(0).unwrap().label.is_none());
    }

    let lng =
        generate(Axis::Longitude, &corners, host.container_size(), &config, &host).unwrap();
    let last = lng.get(50).unwrap();
    assert_relative_eq!(last.tick.x, 800.0, epsilon = 1e-9);
    assert_eq!(last.label.as_ref().unwrap().text, "E 1° 0' 0.0\"");
}

#[test]
fn test_overlay_on_unit_square() {
    let host = UnitSquare {
        size: Point::new(800.0, 600.0),
    };
    let config = TickConfig::builder().with_steps(50, 10).build().unwrap();
    let mut overlay = OverlayController::new(config, RecordingSurface::new());
    overlay
        .handle_event(&MapEvent::Ready { size: host.size }, &host)
        .unwrap();

    let stats = overlay.last_redraw().unwrap();
    assert_eq!(stats.ticks, 102);
    assert_eq!(stats.labels, 20);
}

fn step_counts() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=10, 1usize..=20).prop_map(|(divider, multiple)| (divider * multiple, divider))
}

fn mercator_map() -> impl Strategy<Value = Map> {
    (
        -60.0..60.0f64,
        -170.0..170.0f64,
        0.0..10.0f64,
        200.0..1200.0f64,
        200.0..800.0f64,
    )
        .prop_map(|(lat, lng, zoom, width, height)| {
            let mut map = Map::new(LatLng::new(lat, lng), zoom, Point::new(width, height));
            map.load();
            map
        })
}

#[test]
fn test_whole_world_smaller_than_container() {
    let mut map = Map::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0));
    map.load();
    let config = TickConfig::default();
    let corners = map.viewport_corners();
    let size = map.container_size();

    let lng = generate(Axis::Longitude, &corners, size, &config, &map).unwrap();
    assert!(lng.iter().all(|e| e.value.abs() <= 180.0 + 1e-9));
    assert_eq!(lng.get(0).unwrap().value, -180.0);
    let east = lng.get(100).unwrap().label.as_ref().unwrap();
    assert_eq!(east.text, "E 180° 0' 0.0\"");
    for pair in lng.entries().windows(2) {
        assert!(pair[1].tick.x > pair[0].tick.x);
    }

    let lat = generate(Axis::Latitude, &corners, size, &config, &map).unwrap();
    assert!(lat
        .iter()
        .all(|e| e.value.abs() <= geoticks::constants::MAX_LATITUDE + 1e-9));
    let north = lat.get(100).unwrap().label.as_ref().unwrap();
    assert_eq!(north.text, "N 85° 3' 4.1\"");
    for pair in lat.entries().windows(2) {
        assert!(pair[1].tick.y < pair[0].tick.y);
    }
}

proptest! {
    #[test]
    fn prop_series_length(
        (minor_count, major_divider) in step_counts(),
        map in mercator_map()
    ) {
        let config = TickConfig::builder()
            .with_steps(minor_count, major_divider)
            .build()
            .unwrap();
        let corners = map.viewport_corners();

        for axis in [Axis::Latitude, Axis::Longitude] {
            let series = generate(axis, &corners, map.container_size(), &config, &map).unwrap();
            prop_assert_eq!(series.len(), minor_count + 1);
        }
    }

    #[test]
    fn prop_major_periodicity(
        (minor_count, major_divider) in step_counts(),
        map in mercator_map()
    ) {
        let config = TickConfig::builder()
            .with_steps(minor_count, major_divider)
            .build()
            .unwrap();
        let step = minor_count / major_divider;
        let corners = map.viewport_corners();
        let series =
            generate(Axis::Latitude, &corners, map.container_size(), &config, &map).unwrap();

        for entry in &series {
            prop_assert_eq!(entry.tick.major, entry.index % step == 0);
            prop_assert_eq!(entry.label.is_some(), entry.tick.major && entry.index != 0);
        }
        prop_assert_eq!(series.majors().count(), config.major_count());
    }

    #[test]
    fn prop_projected_positions_are_monotonic(map in mercator_map()) {
        let config = TickConfig::default();
        let corners = map.viewport_corners();
        let size = map.container_size();

        let lat = generate(Axis::Latitude, &corners, size, &config, &map).unwrap();
        for pair in lat.entries().windows(2) {
            // north is up: increasing latitude climbs the container
            prop_assert!(pair[1].tick.y < pair[0].tick.y);
        }

        let lng = generate(Axis::Longitude, &corners, size, &config, &map).unwrap();
        for pair in lng.entries().windows(2) {
            prop_assert!(pair[1].tick.x > pair[0].tick.x);
        }
    }

    #[test]
    fn prop_indivisible_pairs_are_rejected(
        minor_count in 1usize..500,
        major_divider in 2usize..50
    ) {
        prop_assume!(minor_count % major_divider != 0);
        let result = TickConfig::builder().with_steps(minor_count, major_divider).build();
        prop_assert!(
            matches!(
                result,
                Err(GeoTickError::Configuration(
                    ConfigurationError::IndivisibleStepCount { .. }
                ))
            ),
            "expected IndivisibleStepCount"
        );
    }
}
