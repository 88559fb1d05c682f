//! Tick series generation
//!
//! For one axis, the visible geographic range is cut into `minor_count`
//! equal steps in degrees and every step is forward-projected into container
//! pixels. Interpolating in degrees and projecting each point keeps the ticks
//! on exact coordinate values even when the projection is not linear in
//! pixel space (Web Mercator latitude, for instance).

use crate::{
    core::{
        bounds::ViewportBounds,
        config::{validate_step_counts, TickConfig},
        constants::{LAT_LABEL_ROTATION_DEG, LNG_LABEL_ROTATION_DEG, TICK_THICKNESS},
        geo::{LatLng, Point},
    },
    ticks::{
        format::format_coordinate,
        series::{Axis, LabelDescriptor, Series, SeriesEntry, TickDescriptor},
    },
    traits::Projection,
    Result,
};

/// Generates the tick series of `axis` for the viewport described by
/// `bounds` and `viewport_size`.
///
/// Returns exactly `config.minor_count() + 1` entries. Fails with a
/// configuration error, without producing anything, when the step counts do
/// not divide evenly.
pub fn generate<P>(
    axis: Axis,
    bounds: &ViewportBounds,
    viewport_size: Point,
    config: &TickConfig,
    projection: &P,
) -> Result<Series>
where
    P: Projection + ?Sized,
{
    validate_step_counts(config.minor_count(), config.major_divider())?;

    let minor_count = config.minor_count();
    let major_step = config.major_step();
    let (start, end) = match axis {
        Axis::Latitude => bounds.lat_range(),
        Axis::Longitude => bounds.lng_range(),
    };
    let step = if minor_count == 0 {
        0.0
    } else {
        (end - start) / minor_count as f64
    };

    let mut series = Series::with_capacity(axis, minor_count + 1);
    for index in 0..=minor_count {
        let value = start + index as f64 * step;
        let pixel = projection.project(&anchor(axis, bounds, value));
        let major = major_step == 0 || index % major_step == 0;

        let tick = tick_at(axis, pixel, major, viewport_size, config);
        // index 0 sits in the corner shared by both rulers
        let label = (major && index != 0).then(|| label_for(&tick, value, viewport_size, config));

        series.push(SeriesEntry {
            index,
            value,
            tick,
            label,
        });
    }

    log::trace!(
        "generated {:?} series: {} ticks over [{:.6}, {:.6}]",
        axis,
        series.len(),
        start,
        end
    );

    Ok(series)
}

/// Geographic point projected for a step: latitude steps run up the west
/// edge, longitude steps along the south edge.
fn anchor(axis: Axis, bounds: &ViewportBounds, value: f64) -> LatLng {
    match axis {
        Axis::Latitude => LatLng::new(value, bounds.south_west.lng),
        Axis::Longitude => LatLng::new(bounds.south_west.lat, value),
    }
}

fn tick_at(
    axis: Axis,
    pixel: Point,
    major: bool,
    viewport_size: Point,
    config: &TickConfig,
) -> TickDescriptor {
    let size = if major {
        config.major_size()
    } else {
        config.minor_size()
    };
    let offsets = config.offsets();

    match axis {
        Axis::Latitude => TickDescriptor {
            x: offsets.left,
            y: pixel.y,
            width: size,
            height: TICK_THICKNESS,
            axis,
            major,
        },
        Axis::Longitude => TickDescriptor {
            x: pixel.x,
            y: viewport_size.y - offsets.bottom - size,
            width: TICK_THICKNESS,
            height: size,
            axis,
            major,
        },
    }
}

fn label_for(
    tick: &TickDescriptor,
    value: f64,
    viewport_size: Point,
    config: &TickConfig,
) -> LabelDescriptor {
    let text = format_coordinate(value, tick.axis, config.hemisphere_labels());
    let offsets = config.offsets();

    match tick.axis {
        Axis::Latitude => LabelDescriptor {
            x: offsets.left + config.major_size() + config.label_offset(),
            y: tick.y + config.font_size() / 2.0,
            rotation: LAT_LABEL_ROTATION_DEG,
            font_size: config.font_size(),
            text,
        },
        Axis::Longitude => LabelDescriptor {
            x: tick.x,
            y: viewport_size.y - offsets.bottom - config.major_size() - config.label_offset(),
            rotation: LNG_LABEL_ROTATION_DEG,
            font_size: config.font_size(),
            text,
        },
    }
}
