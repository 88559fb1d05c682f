//! Engine-wide numbers: projection constants and the default ruler layout.
//! Keeping them in a single place makes it easier to tweak the defaults.

/// Default square tile size in pixels; world width at zoom 0.
pub const TILE_SIZE: f64 = 256.0;

/// Web Mercator sphere radius in meters (EPSG:3857).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude beyond which Web Mercator diverges.
pub const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// Zoom limits of the reference viewport.
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 18.0;

/// Total minor subdivisions across one ruler.
pub const DEFAULT_MINOR_COUNT: usize = 100;

/// `minor_count / major_divider` minor steps between two major ticks.
pub const DEFAULT_MAJOR_DIVIDER: usize = 10;

/// Minor tick length in pixels.
pub const DEFAULT_MINOR_SIZE: f64 = 10.0;

/// Major tick length in pixels.
pub const DEFAULT_MAJOR_SIZE: f64 = 20.0;

/// Label font size in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Gap between a major tick and its label in pixels.
pub const DEFAULT_LABEL_OFFSET: f64 = 4.0;

/// Thickness of every tick rectangle across its run.
pub const TICK_THICKNESS: f64 = 1.0;

/// Longitude labels are slanted so neighbours along the bottom edge don't overlap.
pub const LNG_LABEL_ROTATION_DEG: f64 = -45.0;

/// Latitude labels read horizontally.
pub const LAT_LABEL_ROTATION_DEG: f64 = 0.0;

/// CSS class attached to every drawn primitive for external stylesheets.
pub const OUTLINE_CLASS: &str = "geotick-outline";

/// CSS class of the overlay container element.
pub const CONTAINER_CLASS: &str = "geotick-container";
