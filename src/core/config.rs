//! Ruler configuration
//!
//! `TickConfig` is an immutable, always-valid description of the two rulers.
//! It is produced by [`TickConfigBuilder::build`], by resolving a
//! [`TickDensity`] preset, or by deserializing JSON; every path goes through
//! the same validation so an indivisible step count can never reach the
//! generator.

use crate::core::builder::TickConfigBuilder;
use crate::ticks::series::Axis;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("major divider {major_divider} must evenly divide minor count {minor_count}")]
    IndivisibleStepCount {
        minor_count: usize,
        major_divider: usize,
    },

    #[error("major divider must be greater than zero")]
    ZeroMajorDivider,

    #[error("`{field}` must be finite and in range, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },
}

/// Pixel insets of the rulers from the container edges.
///
/// The rulers only run along the left and bottom edges, so only `left` and
/// `bottom` move anything. `top` and `right` are accepted and validated for
/// a complete inset description but currently have no effect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOffsets {
    /// Unused by the rulers
    pub top: f64,
    /// Unused by the rulers
    pub right: f64,
    /// Lifts the longitude ruler off the bottom edge
    pub bottom: f64,
    /// Moves the latitude ruler away from the left edge
    pub left: f64,
}

impl EdgeOffsets {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Validated ruler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TickConfigBuilder", into = "TickConfigBuilder")]
pub struct TickConfig {
    pub(crate) minor_count: usize,
    pub(crate) major_divider: usize,
    pub(crate) minor_size: f64,
    pub(crate) major_size: f64,
    pub(crate) font_size: f64,
    pub(crate) label_offset: f64,
    pub(crate) enable_lat: bool,
    pub(crate) enable_lng: bool,
    pub(crate) offsets: EdgeOffsets,
    pub(crate) hemisphere_labels: bool,
}

impl TickConfig {
    pub fn builder() -> TickConfigBuilder {
        TickConfigBuilder::new()
    }

    /// Parses and validates a JSON document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Re-checks the invariants. Always `Ok` for values built through this module.
    pub fn validate(&self) -> std::result::Result<(), ConfigurationError> {
        validate_step_counts(self.minor_count, self.major_divider)?;
        validate_dimension("minor_size", self.minor_size)?;
        validate_dimension("major_size", self.major_size)?;
        validate_dimension("label_offset", self.label_offset)?;
        for (field, value) in [
            ("offsets.top", self.offsets.top),
            ("offsets.right", self.offsets.right),
            ("offsets.bottom", self.offsets.bottom),
            ("offsets.left", self.offsets.left),
        ] {
            validate_dimension(field, value)?;
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigurationError::InvalidDimension {
                field: "font_size",
                value: self.font_size,
            });
        }
        Ok(())
    }

    pub fn minor_count(&self) -> usize {
        self.minor_count
    }

    pub fn major_divider(&self) -> usize {
        self.major_divider
    }

    /// Minor steps between two consecutive major ticks.
    pub fn major_step(&self) -> usize {
        self.minor_count / self.major_divider
    }

    /// Number of major ticks on one ruler, the one at index 0 included.
    pub fn major_count(&self) -> usize {
        match self.major_step() {
            0 => 1,
            step => self.minor_count / step + 1,
        }
    }

    pub fn minor_size(&self) -> f64 {
        self.minor_size
    }

    pub fn major_size(&self) -> f64 {
        self.major_size
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn label_offset(&self) -> f64 {
        self.label_offset
    }

    pub fn offsets(&self) -> EdgeOffsets {
        self.offsets
    }

    pub fn hemisphere_labels(&self) -> bool {
        self.hemisphere_labels
    }

    pub fn is_axis_enabled(&self, axis: Axis) -> bool {
        match axis {
            Axis::Latitude => self.enable_lat,
            Axis::Longitude => self.enable_lng,
        }
    }

    /// Enabled axes in drawing order: latitude first, then longitude.
    pub fn enabled_axes(&self) -> impl Iterator<Item = Axis> + '_ {
        [Axis::Latitude, Axis::Longitude]
            .into_iter()
            .filter(|axis| self.is_axis_enabled(*axis))
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        TickDensity::default().resolve()
    }
}

impl TryFrom<TickConfigBuilder> for TickConfig {
    type Error = crate::GeoTickError;

    fn try_from(builder: TickConfigBuilder) -> Result<Self> {
        builder.build()
    }
}

pub(crate) fn validate_step_counts(
    minor_count: usize,
    major_divider: usize,
) -> std::result::Result<(), ConfigurationError> {
    if major_divider == 0 {
        return Err(ConfigurationError::ZeroMajorDivider);
    }
    if minor_count % major_divider != 0 {
        return Err(ConfigurationError::IndivisibleStepCount {
            minor_count,
            major_divider,
        });
    }
    Ok(())
}

fn validate_dimension(
    field: &'static str,
    value: f64,
) -> std::result::Result<(), ConfigurationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigurationError::InvalidDimension { field, value });
    }
    Ok(())
}

/// Ready-made ruler densities.
#[derive(Debug, Clone, PartialEq)]
pub enum TickDensity {
    /// 100 minor steps, a major tick every 10
    Fine,
    /// 50 minor steps, a major tick every 10
    Standard,
    /// 20 minor steps, a major tick every 5
    Coarse,
    Custom(TickConfig),
}

impl TickDensity {
    pub fn resolve(&self) -> TickConfig {
        let (minor_count, major_divider) = match self {
            Self::Fine => (100, 10),
            Self::Standard => (50, 5),
            Self::Coarse => (20, 4),
            Self::Custom(config) => return config.clone(),
        };
        TickConfig {
            minor_count,
            major_divider,
            ..TickConfigBuilder::new().into_unchecked()
        }
    }
}

impl Default for TickDensity {
    fn default() -> Self {
        Self::Fine
    }
}
